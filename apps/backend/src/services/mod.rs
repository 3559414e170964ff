pub mod audio;
pub mod ingest;
