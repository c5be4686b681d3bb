




mod error;
