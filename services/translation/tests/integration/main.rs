mod bundle_test;
mod harness_test;
mod list_test;
