mod gateway_tests;
mod google_tests;
mod local_state_tests;
mod sheet_tests;
mod stats_tests;
mod store_tests;
