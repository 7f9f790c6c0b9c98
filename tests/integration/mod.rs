//! Integration tests for the Remat transaction replay and export system

mod export_end_to_end;
mod frame_integrity;
