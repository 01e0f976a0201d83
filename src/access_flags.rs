bitflags! {
    /// Access modifiers of a field or of an accessor method
    pub struct AccessFlags: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const SYNTHETIC = 0x1000;
    }
}

impl Default for AccessFlags {
    fn default() -> AccessFlags {
        AccessFlags::PUBLIC
    }
}

impl AccessFlags {
    /// Reading a private member requires the handle to be made accessible
    pub fn requires_access_for_read(&self) -> bool {
        self.contains(AccessFlags::PRIVATE)
    }

    /// Writing a private or final member requires the handle to be made accessible
    pub fn requires_access_for_write(&self) -> bool {
        self.intersects(AccessFlags::PRIVATE | AccessFlags::FINAL)
    }
}
