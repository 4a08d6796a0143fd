//! Default values for data-repo settings.

pub fn sync_index_timing() -> i64 {
    12 * 1000 // milliseconds
}

pub fn index_retention_days() -> i32 {
    180
}

pub fn retention_indexes_daily() -> i32 {
    2
}
