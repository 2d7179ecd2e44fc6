use crate::consts::ENTRY_NAME_MAX;

use bitfield::bitfield;
use core::fmt;
use heapless::String;

bitfield! {
    /// Status response bitset. Bits 5-7 are reserved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status(u8);
    pub sd_init_good, _: 0;
    pub last_command_succeeded, _: 1;
    pub last_command_known, _: 2;
    pub file_open, _: 3;
    pub in_root_directory, _: 4;
}

/// Firmware version pair reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Name of one file or directory returned by a listing.
pub type EntryName = String<ENTRY_NAME_MAX>;
