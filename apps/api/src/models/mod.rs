pub mod postmeta;
