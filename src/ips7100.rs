use crate::commands::{
    Command, INIT_PARAM, INIT_SETTLE_MS, IPS7100_I2C_ADDRESS, MASS_CONCENTRATIONS_REPLY_LEN,
    PARTICLE_COUNTS_REPLY_LEN, REFERENCE_VOLTAGE_REPLY_LEN, STARTUP_SETTLE_MS, STATUS_REPLY_LEN,
};
use crate::crc;
use crate::decode;
use crate::error::Error;
use crate::i2c;
use crate::types::{Config, Ips7100Data, RetryPolicy, BIN_COUNT};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// IPS-7100 sensor instance. Use related methods to take measurements.
#[derive(Debug)]
pub struct Ips7100<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
    data: Ips7100Data,
}

impl<I2C, D, E> Ips7100<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_config(i2c, delay, Config::default())
    }

    pub fn with_config(i2c: I2C, delay: D, config: Config) -> Self {
        Ips7100 {
            i2c,
            delay,
            config,
            data: Ips7100Data::default(),
        }
    }

    /// Gives back the bus and the delay provider.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Enables or disables tracing of raw replies and checksum comparisons.
    pub fn set_debug(&mut self, enabled: bool) {
        self.config.debug = enabled;
    }

    /// Startup handshake. Must run once before any other command.
    pub fn begin(&mut self) -> Result<(), Error<E>> {
        log::info!("IPS-7100 init at {:#04x}", IPS7100_I2C_ADDRESS);
        self.delay.delay_ms(STARTUP_SETTLE_MS);
        i2c::write_command_with_param(
            &mut self.i2c,
            IPS7100_I2C_ADDRESS,
            Command::Init.opcode(),
            INIT_PARAM,
        )?;
        self.delay.delay_ms(INIT_SETTLE_MS);
        Ok(())
    }

    /// Reads particle counts and mass concentrations.
    ///
    /// The stored reading changes only once both replies pass their checksum.
    /// With [`RetryPolicy::Forever`] this blocks until they do.
    pub fn update(&mut self) -> Result<(), Error<E>> {
        let reply =
            self.checksummed_read::<PARTICLE_COUNTS_REPLY_LEN>(Command::ReadParticleCounts)?;
        let particle_counts = decode::particle_counts(&reply);

        let reply =
            self.checksummed_read::<MASS_CONCENTRATIONS_REPLY_LEN>(Command::ReadMassConcentrations)?;
        let mass_concentrations = decode::mass_concentrations(&reply);

        self.data = Ips7100Data {
            particle_counts,
            mass_concentrations,
        };
        Ok(())
    }

    /// Last reading taken by [`update`](Self::update). Zeroed until the first update.
    pub fn data(&self) -> Ips7100Data {
        self.data
    }

    pub fn particle_counts(&self) -> [u32; BIN_COUNT] {
        self.data.particle_counts
    }

    pub fn mass_concentrations(&self) -> [f32; BIN_COUNT] {
        self.data.mass_concentrations
    }

    pub fn get_reference_voltage(&mut self) -> Result<u16, Error<E>> {
        let reply =
            self.checksummed_read::<REFERENCE_VOLTAGE_REPLY_LEN>(Command::ReadReferenceVoltage)?;
        Ok(decode::reference_voltage(&reply))
    }

    pub fn get_status(&mut self) -> Result<u8, Error<E>> {
        let reply = self.checksummed_read::<STATUS_REPLY_LEN>(Command::ReadStatus)?;
        Ok(decode::status(&reply))
    }

    /// Switches the fan. The sensor does not acknowledge, so a completed bus write reports `true`.
    pub fn set_fan(&mut self, on: bool) -> Result<bool, Error<E>> {
        i2c::write_command_with_param(
            &mut self.i2c,
            IPS7100_I2C_ADDRESS,
            Command::SetFan.opcode(),
            on as u8,
        )?;
        Ok(true)
    }

    /// Single transaction without checksum validation, for firmware that sends no trailer.
    ///
    /// Write-only commands are refused with [`Error::NoReply`] before anything goes on the bus,
    /// and so is a `buf` shorter than the reply.
    pub fn read_unchecked<'b>(
        &mut self,
        command: Command,
        buf: &'b mut [u8],
    ) -> Result<&'b [u8], Error<E>> {
        let reply_len = command.reply_len();
        if reply_len == 0 {
            return Err(Error::NoReply);
        }
        let reply = buf
            .get_mut(..reply_len)
            .ok_or(Error::BufferTooSmall { needed: reply_len })?;
        self.transact(command.opcode(), reply)?;
        Ok(reply)
    }

    fn checksummed_read<const N: usize>(
        &mut self,
        command: Command,
    ) -> Result<[u8; N], Error<E>> {
        let opcode = command.opcode();
        debug_assert_eq!(N, command.reply_len());
        let mut reply = [0u8; N];
        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            self.transact(opcode, &mut reply)?;

            match crc::validate(&reply) {
                Ok(()) => {
                    if self.config.debug {
                        log::debug!("checksum ok for {:#04x}", opcode);
                    }
                    return Ok(reply);
                }
                Err(mismatch) => {
                    if self.config.debug {
                        log::debug!(
                            "expected checksum: {} received checksum: {}",
                            mismatch.expected,
                            mismatch.received
                        );
                    }
                    log::warn!(
                        "checksum failed for {:#04x} (attempt {})",
                        opcode,
                        attempts
                    );
                    if let RetryPolicy::Limited(max) = self.config.retry {
                        if attempts >= max {
                            return Err(Error::ChecksumExhausted { attempts });
                        }
                    }
                    self.delay.delay_ms(self.config.backoff_ms);
                }
            }
        }
    }

    fn transact(&mut self, opcode: u8, reply: &mut [u8]) -> Result<(), Error<E>> {
        i2c::write_command(&mut self.i2c, IPS7100_I2C_ADDRESS, opcode)?;
        i2c::read_reply(&mut self.i2c, IPS7100_I2C_ADDRESS, reply)?;
        if self.config.debug {
            log::debug!("cmd {:#04x} response: {:?}", opcode, reply);
        }
        Ok(())
    }
}
