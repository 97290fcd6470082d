pub mod threaded_submitter;
