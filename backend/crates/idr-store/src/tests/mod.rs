mod store_entry;
