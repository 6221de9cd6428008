use std::collections::BTreeMap;
use crate::session::structs::session_entry::SessionEntry;

#[derive(Debug, Default)]
pub struct RegistryState {
    pub(crate) next_id: u64,
    pub(crate) entries: BTreeMap<u64, SessionEntry>,
    pub(crate) closed: bool,
}
