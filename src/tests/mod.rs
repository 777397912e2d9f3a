mod context_tests;
mod error_tests;
mod permissions_tests;
mod state_tests;
mod theme_tests;
