mod event_tests;
mod member_tests;
