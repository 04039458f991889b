mod audio;
mod error_reporter;
mod format;
