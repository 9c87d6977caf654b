pub mod identity_record;
pub mod info_kind;
pub mod record_summary;
