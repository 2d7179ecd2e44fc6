pub mod registers {
    /// Device identity byte.
    pub const ID: u8 = 0x00;
    /// Status bitset of the device and its SD card.
    pub const STATUS: u8 = 0x01;
    /// Major half of the firmware version.
    pub const FIRMWARE_MAJOR: u8 = 0x02;
    /// Minor half of the firmware version.
    pub const FIRMWARE_MINOR: u8 = 0x03;
    /// Reinitialize the SD card.
    pub const INIT: u8 = 0x05;
    /// Create a file in the current directory without opening it.
    pub const CREATE_FILE: u8 = 0x06;
    /// Create a directory in the current directory.
    pub const MKDIR: u8 = 0x07;
    /// Change the current directory.
    pub const CD: u8 = 0x08;
    /// Start reading a file's contents.
    pub const READ_FILE: u8 = 0x09;
    /// Set the read offset within a file.
    pub const START_POSITION: u8 = 0x0A;
    /// Open a file for appending, creating it when missing.
    pub const OPEN_FILE: u8 = 0x0B;
    /// Record payload bytes to the open file.
    pub const WRITE_FILE: u8 = 0x0C;
    /// Query a file's size.
    pub const FILE_SIZE: u8 = 0x0D;
    /// Start a directory listing, wildcards allowed.
    pub const LIST: u8 = 0x0E;
    /// Remove a file, wildcards allowed.
    pub const RM: u8 = 0x0F;
    /// Remove a directory including its contents.
    pub const RMRF: u8 = 0x10;
    /// Flush the open file to the card.
    pub const SYNC_FILE: u8 = 0x11;
    /// Change the device's I2C address.
    pub const I2C_ADDRESS: u8 = 0x1E;
}

pub mod tokens {
    /// Terminates a directory-entry name.
    pub const ENTRY_TERMINATOR: u8 = 0x00;
    /// Marks the end of a directory listing when it is the first unread
    /// byte of an entry response.
    pub const END_OF_LISTING: u8 = 0xFF;
}

/// Factory-default I2C address (0x29 is the documented alternate).
pub const DEFAULT_ADDRESS: u8 = 0x2A;

/// Size of the device's I2C receive buffer. An outbound frame, register
/// byte included, must fit in one transaction of at most this many bytes.
pub const RX_BUFFER_LEN: usize = 32;

/// Longest directory-entry name one bounded read can return.
pub const ENTRY_NAME_MAX: usize = 32;
