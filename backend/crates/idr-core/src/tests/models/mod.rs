mod identity_record;
mod info_kind;
