//! Qwiic OpenLog I2C driver written in Embedded Rust.
//!
//! This crate is intended to allow you to record data to a microSD card
//! through the Qwiic OpenLog module by I2C bus. Every operation is one
//! command frame (a register byte plus optional raw argument) sent as a
//! single write transaction, followed, for the commands that produce one,
//! by a fixed-format response read.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

mod config;
mod consts;
mod response;


pub use crate::config::{DefaultOpenLogConfig, OpenLogConfig};
pub use crate::consts::{registers, tokens, DEFAULT_ADDRESS, ENTRY_NAME_MAX, RX_BUFFER_LEN};
pub use crate::response::{EntryName, FirmwareVersion, Status};

use core::fmt::Write as _;
use core::marker::PhantomData;
use embedded_hal::blocking::i2c::{Read, Write};
use heapless::String;

/// [`QwiicOpenLog`] result error.
///
/// `E` - transport error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Error from the I2C peripheral.
    Transport(E),
    /// The SD card did not come up during initialization.
    CardNotFound,
    /// Frame would not fit a single bus transaction; nothing was sent.
    PayloadTooLong,
    /// A directory search is in progress and this operation would
    /// consume its queued response stream.
    SearchActive,
}

/// Qwiic OpenLog I2C driver.
///
/// `I2C` - I2C bus.
/// `Config` - Config implementation of driver config trait.
pub struct QwiicOpenLog<I2C, Config: OpenLogConfig = DefaultOpenLogConfig> {
    i2c: I2C,
    address: u8,
    search_active: bool,
    config: PhantomData<Config>,
}

impl<I2C, E, Config> QwiicOpenLog<I2C, Config>
where
    I2C: Write<Error = E> + Read<Error = E>,
    Config: OpenLogConfig,
{
    /// Largest single bus write, bounded by the host engine and the
    /// device's receive buffer.
    const WRITE_LIMIT: usize = if Config::I2C_BUFFER_LENGTH < RX_BUFFER_LEN {
        Config::I2C_BUFFER_LENGTH
    } else {
        RX_BUFFER_LEN
    };
    /// Payload bytes that fit one write after the register byte.
    const PAYLOAD_MAX: usize = Self::WRITE_LIMIT - 1;

    /// Creates a new [`QwiicOpenLog<I2C, Config>`] at the factory-default
    /// address.
    ///
    /// `i2c` - I2C bus instance, already initialized by the caller.
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Creates a new [`QwiicOpenLog<I2C, Config>`] at the given address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        QwiicOpenLog {
            i2c,
            address,
            search_active: false,
            config: PhantomData::<Config>,
        }
    }

    /// Releases the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Checks communication with the device and that its SD card came up.
    ///
    /// The device does not distinguish a wrong address from a missing
    /// card; both report as [`Error::CardNotFound`]. Any previous
    /// directory search is abandoned.
    pub fn initialize(&mut self) -> Result<(), Error<E>> {
        info!("OpenLog initialize started");

        self.search_active = false;

        let status = self.status()?;
        if status.sd_init_good() {
            info!("OpenLog initialized, status: {:02X}", status.0);
            return Ok(());
        }

        error!("OpenLog SD card did not initialize, status: {:02X}", status.0);
        Err(Error::CardNotFound)
    }

    /// Get the status byte from the device. Read fresh on every call.
    pub fn status(&mut self) -> Result<Status, Error<E>> {
        self.ensure_no_search()?;
        self.read_register_byte(registers::STATUS).map(Status)
    }

    /// Get the firmware version pair from the device.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion, Error<E>> {
        self.ensure_no_search()?;

        let major = self.read_register_byte(registers::FIRMWARE_MAJOR)?;
        let minor = self.read_register_byte(registers::FIRMWARE_MINOR)?;

        Ok(FirmwareVersion { major, minor })
    }

    /// Change the device's I2C address. The device persists the new
    /// address and this driver targets it for every subsequent frame; no
    /// confirmation is read back.
    pub fn set_i2c_address(&mut self, address: u8) -> Result<(), Error<E>> {
        // A u8 renders to at most three decimal digits.
        let mut arg: String<3> = String::new();
        let _ = write!(arg, "{}", address);

        self.send_command(registers::I2C_ADDRESS, arg.as_bytes())?;
        self.address = address;

        info!("OpenLog address changed to {}", address);

        Ok(())
    }

    /// Open a file for appending, creating it when missing. Payload
    /// bytes sent with the write operations are recorded to this file.
    pub fn append(&mut self, file_name: &str) -> Result<(), Error<E>> {
        self.send_command(registers::OPEN_FILE, file_name.as_bytes())
    }

    /// Create a file in the current directory without opening it.
    pub fn create(&mut self, file_name: &str) -> Result<(), Error<E>> {
        self.send_command(registers::CREATE_FILE, file_name.as_bytes())
    }

    /// Create the given directory in the current directory.
    pub fn make_directory(&mut self, directory_name: &str) -> Result<(), Error<E>> {
        self.send_command(registers::MKDIR, directory_name.as_bytes())
    }

    /// Change to the given directory.
    pub fn change_directory(&mut self, directory_name: &str) -> Result<(), Error<E>> {
        self.send_command(registers::CD, directory_name.as_bytes())
    }

    /// Get the size of a file in bytes. The device reports -1 when it
    /// cannot find the file.
    pub fn file_size(&mut self, file_name: &str) -> Result<i32, Error<E>> {
        self.ensure_no_search()?;
        self.send_command(registers::FILE_SIZE, file_name.as_bytes())?;

        let mut raw = [0u8; 4];
        self.bus_read(&mut raw)?;

        Ok(i32::from_be_bytes(raw))
    }

    /// Read the contents of a file into `buf`, from the start of the
    /// file, in bounded transactions of at most
    /// [`I2C_BUFFER_LENGTH`](OpenLogConfig::I2C_BUFFER_LENGTH) bytes.
    ///
    /// Exactly `buf.len()` bytes are consumed from the device; past the
    /// end of the file the device pads with zeros, and short reads are
    /// not detected.
    pub fn read_file(&mut self, file_name: &str, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.ensure_no_search()?;
        self.send_command(registers::READ_FILE, file_name.as_bytes())?;

        for chunk in buf.chunks_mut(Config::I2C_BUFFER_LENGTH) {
            self.bus_read(chunk)?;
        }

        Ok(())
    }

    /// Start a directory listing of the current directory. Wildcards
    /// allowed, e.g. `*` or `*.TXT`. Entries are then returned one per
    /// [`next_directory_item`](Self::next_directory_item) call.
    pub fn search_directory(&mut self, pattern: &str) -> Result<(), Error<E>> {
        if self.search_active {
            warn!("OpenLog search restarted while one was in progress");
        }

        self.send_command(registers::LIST, pattern.as_bytes())?;
        self.search_active = true;

        Ok(())
    }

    /// Get the next file or directory name from the running listing.
    ///
    /// Returns `None` at the end of the listing (which also ends the
    /// search) and on any call made while no search is in progress;
    /// neither case touches the bus.
    pub fn next_directory_item(&mut self) -> Result<Option<EntryName>, Error<E>> {
        if !self.search_active {
            return Ok(None);
        }

        let mut raw = [0u8; ENTRY_NAME_MAX];
        let len = Config::I2C_BUFFER_LENGTH.min(ENTRY_NAME_MAX);
        self.bus_read(&mut raw[..len])?;

        let mut name = EntryName::new();
        for (received, &byte) in raw[..len].iter().enumerate() {
            if byte == tokens::ENTRY_TERMINATOR {
                break;
            }
            if received == 0 && byte == tokens::END_OF_LISTING {
                self.search_active = false;
                return Ok(None);
            }
            if name.push(byte as char).is_err() {
                break;
            }
        }

        Ok(Some(name))
    }

    /// Abandon a running directory listing without draining it. The next
    /// command sent to the device replaces its listing state anyway.
    pub fn cancel_search(&mut self) {
        self.search_active = false;
    }

    /// Whether a directory listing is in progress.
    pub fn search_in_progress(&self) -> bool {
        self.search_active
    }

    /// Remove a file, wildcards allowed. Returns the number of items the
    /// device removed.
    pub fn remove_file(&mut self, file_name: &str) -> Result<u32, Error<E>> {
        self.remove(file_name, false)
    }

    /// Remove a directory and everything in it. The device reports 1 for
    /// a removed directory regardless of its contents.
    pub fn remove_directory(&mut self, directory_name: &str) -> Result<u32, Error<E>> {
        self.remove(directory_name, true)
    }

    /// Remove a file or directory. With `recursive`, a directory's
    /// contents are removed as well. Returns the removed-item count.
    pub fn remove(&mut self, name: &str, recursive: bool) -> Result<u32, Error<E>> {
        self.ensure_no_search()?;

        let register = if recursive { registers::RMRF } else { registers::RM };
        self.send_command(register, name.as_bytes())?;

        let mut raw = [0u8; 4];
        self.bus_read(&mut raw)?;

        Ok(u32::from_be_bytes(raw))
    }

    /// Record a single byte to the open file.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), Error<E>> {
        self.bus_write(&[registers::WRITE_FILE, byte])
    }

    /// Record payload bytes to the open file in one transaction. The
    /// register byte takes one byte of the transaction, so with the
    /// default configuration at most 31 payload bytes fit; longer input
    /// is rejected without sending anything, chunking is up to the
    /// caller (or use the [`core::fmt::Write`] impl).
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), Error<E>> {
        self.send_command(registers::WRITE_FILE, data)
    }

    /// Flush the open file to the card.
    pub fn sync_file(&mut self) -> Result<(), Error<E>> {
        self.send_command(registers::SYNC_FILE, &[])
    }

    /// Frame a register byte plus raw argument bytes and send it as a
    /// single write transaction.
    pub fn send_command(&mut self, register: u8, arg: &[u8]) -> Result<(), Error<E>> {
        if arg.len() > Self::PAYLOAD_MAX {
            error!(
                "OpenLog frame rejected, argument length: {}, limit: {}",
                arg.len(),
                Self::PAYLOAD_MAX
            );
            return Err(Error::PayloadTooLong);
        }

        let len = 1 + arg.len();
        let mut frame = [0u8; RX_BUFFER_LEN];
        frame[0] = register;
        frame[1..len].copy_from_slice(arg);

        self.bus_write(&frame[..len])
    }

    /// Issue a command and read back its one-byte response.
    fn read_register_byte(&mut self, register: u8) -> Result<u8, Error<E>> {
        self.send_command(register, &[])?;

        let mut raw = [0u8; 1];
        self.bus_read(&mut raw)?;

        Ok(raw[0])
    }

    /// Reject response-reading commands while a listing is in progress.
    fn ensure_no_search(&self) -> Result<(), Error<E>> {
        if self.search_active {
            error!("OpenLog response read refused, directory search in progress");
            Err(Error::SearchActive)
        } else {
            Ok(())
        }
    }

    /// Send one frame over the bus.
    fn bus_write(&mut self, frame: &[u8]) -> Result<(), Error<E>> {
        match self.i2c.write(self.address, frame) {
            Ok(()) => Ok(()),
            Err(_) if Config::IGNORE_SEND_ERRORS => Ok(()),
            Err(e) => Err(Error::Transport(e)),
        }
    }

    /// Fill `buf` from the device in one bounded read.
    fn bus_read(&mut self, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c.read(self.address, buf).map_err(Error::Transport)
    }
}

/// The print half of the driver: strings are chopped into frames the
/// open file can take, so `write!` and `writeln!` record straight to
/// the log.
impl<I2C, E, Config> core::fmt::Write for QwiicOpenLog<I2C, Config>
where
    I2C: Write<Error = E> + Read<Error = E>,
    Config: OpenLogConfig,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for chunk in s.as_bytes().chunks(Self::PAYLOAD_MAX) {
            self.write_bytes(chunk).map_err(|_| core::fmt::Error)?;
        }

        Ok(())
    }
}
