use crate::commands::DEFAULT_BACKOFF_MS;

/// Number of particle size bins reported by the sensor.
pub const BIN_COUNT: usize = 7;

/// Particle size bins, smallest first. The discriminant is the bin's position in the reading arrays.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SizeBin {
    /// 0.1 µm
    Um0_1 = 0,
    /// 0.3 µm
    Um0_3 = 1,
    /// 0.5 µm
    Um0_5 = 2,
    /// 1.0 µm
    Um1_0 = 3,
    /// 2.5 µm
    Um2_5 = 4,
    /// 5.0 µm
    Um5_0 = 5,
    /// 10 µm
    Um10_0 = 6,
}

impl SizeBin {
    pub const ALL: [SizeBin; BIN_COUNT] = [
        SizeBin::Um0_1,
        SizeBin::Um0_3,
        SizeBin::Um0_5,
        SizeBin::Um1_0,
        SizeBin::Um2_5,
        SizeBin::Um5_0,
        SizeBin::Um10_0,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// IPS-7100 sensor data.
///
/// Both arrays always come from complete, checksum-valid replies.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ips7100Data {
    /// Particle counts, PC0.1 to PC10
    pub particle_counts: [u32; BIN_COUNT],
    /// Mass concentrations, PM0.1 to PM10, in sensor-native units
    pub mass_concentrations: [f32; BIN_COUNT],
}

impl Ips7100Data {
    pub fn particle_count(&self, bin: SizeBin) -> u32 {
        self.particle_counts[bin.index()]
    }

    pub fn mass_concentration(&self, bin: SizeBin) -> f32 {
        self.mass_concentrations[bin.index()]
    }

    pub fn pc0_1(&self) -> u32 {
        self.particle_count(SizeBin::Um0_1)
    }
    pub fn pc0_3(&self) -> u32 {
        self.particle_count(SizeBin::Um0_3)
    }
    pub fn pc0_5(&self) -> u32 {
        self.particle_count(SizeBin::Um0_5)
    }
    pub fn pc1_0(&self) -> u32 {
        self.particle_count(SizeBin::Um1_0)
    }
    pub fn pc2_5(&self) -> u32 {
        self.particle_count(SizeBin::Um2_5)
    }
    pub fn pc5_0(&self) -> u32 {
        self.particle_count(SizeBin::Um5_0)
    }
    pub fn pc10_0(&self) -> u32 {
        self.particle_count(SizeBin::Um10_0)
    }

    pub fn pm0_1(&self) -> f32 {
        self.mass_concentration(SizeBin::Um0_1)
    }
    pub fn pm0_3(&self) -> f32 {
        self.mass_concentration(SizeBin::Um0_3)
    }
    pub fn pm0_5(&self) -> f32 {
        self.mass_concentration(SizeBin::Um0_5)
    }
    pub fn pm1_0(&self) -> f32 {
        self.mass_concentration(SizeBin::Um1_0)
    }
    pub fn pm2_5(&self) -> f32 {
        self.mass_concentration(SizeBin::Um2_5)
    }
    pub fn pm5_0(&self) -> f32 {
        self.mass_concentration(SizeBin::Um5_0)
    }
    pub fn pm10_0(&self) -> f32 {
        self.mass_concentration(SizeBin::Um10_0)
    }
}

/// What to do when a checksummed reply fails validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Keep retrying until a valid reply arrives. Can block forever on a persistent fault.
    Forever,
    /// Give up after this many failed attempts with [`Error::ChecksumExhausted`](crate::Error::ChecksumExhausted).
    Limited(u32),
}

/// Driver configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log raw reply bytes and checksum comparisons at debug level.
    pub debug: bool,
    pub retry: RetryPolicy,
    /// Wait after a checksum mismatch [ms].
    pub backoff_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            retry: RetryPolicy::Forever,
            backoff_ms: DEFAULT_BACKOFF_MS,
        }
    }
}
