/// Default I2C address of the IPS-7100.
pub const IPS7100_I2C_ADDRESS: u8 = 0x4B;

/// Every opcode goes out in a frame of this size, zero padded.
pub(crate) const COMMAND_FRAME_LEN: usize = 8;

/// Parameter byte sent with [`Command::Init`] during startup.
pub(crate) const INIT_PARAM: u8 = 0x01;

/// Bus settle time before the priming command [ms].
pub(crate) const STARTUP_SETTLE_MS: u32 = 100;

/// Time the sensor needs after the priming command [ms].
pub(crate) const INIT_SETTLE_MS: u32 = 1000;

/// Wait between attempts after a checksum mismatch [ms].
pub const DEFAULT_BACKOFF_MS: u32 = 1000;

/// Reply length of [`Command::ReadParticleCounts`].
pub const PARTICLE_COUNTS_REPLY_LEN: usize = 30;
/// Reply length of [`Command::ReadMassConcentrations`]: 28 payload bytes, 2 unused, 2 trailer.
pub const MASS_CONCENTRATIONS_REPLY_LEN: usize = 32;
/// Reply length of [`Command::ReadReferenceVoltage`].
pub const REFERENCE_VOLTAGE_REPLY_LEN: usize = 4;
/// Reply length of [`Command::ReadStatus`].
pub const STATUS_REPLY_LEN: usize = 3;

/// Commands understood by the IPS-7100.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Priming write issued once by `begin`.
    Init,
    /// Read the seven particle counts.
    ReadParticleCounts,
    /// Read the seven mass concentrations.
    ReadMassConcentrations,
    /// Read the reference voltage.
    ReadReferenceVoltage,
    /// Read the status byte.
    ReadStatus,
    /// Switch the fan on or off.
    SetFan,
}

impl Command {
    /// Command opcode, reply length in bytes and whether the reply carries a CRC-16 trailer.
    pub fn as_tuple(self) -> (u8, usize, bool) {
        match self {
            Self::Init => (0x10, 0, false),
            Self::ReadParticleCounts => (0x11, PARTICLE_COUNTS_REPLY_LEN, true),
            Self::ReadMassConcentrations => (0x12, MASS_CONCENTRATIONS_REPLY_LEN, true),
            Self::ReadReferenceVoltage => (0x69, REFERENCE_VOLTAGE_REPLY_LEN, true),
            Self::ReadStatus => (0x6A, STATUS_REPLY_LEN, true),
            Self::SetFan => (0x2B, 0, false),
        }
    }

    /// First byte of the command frame.
    pub fn opcode(self) -> u8 {
        self.as_tuple().0
    }

    /// Bytes the sensor sends back, 0 for write-only commands.
    pub fn reply_len(self) -> usize {
        self.as_tuple().1
    }

    /// Whether the reply ends in a CRC-16 trailer.
    pub fn checksummed(self) -> bool {
        self.as_tuple().2
    }
}
