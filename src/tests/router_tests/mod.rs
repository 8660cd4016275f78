mod forms_tests;
mod listings_tests;
