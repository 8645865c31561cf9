pub(crate) const ERR_POISONED_LOCK: &str = "poisoned lock - cannot continue execution because a panic occurred while the pool was being modified";
