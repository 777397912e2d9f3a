pub mod allocation_client;
pub mod response;

pub use allocation_client::AllocationClient;
pub use response::{error_from_response, first_error_message};
