use parking_lot::Mutex;
use crate::session::structs::registry_state::RegistryState;

#[derive(Debug)]
pub struct SessionRegistry {
    pub(crate) state: Mutex<RegistryState>,
    pub(crate) default_size: u64,
}
