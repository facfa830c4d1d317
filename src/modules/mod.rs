pub mod call_details;
