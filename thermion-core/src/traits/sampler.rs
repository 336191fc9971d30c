//! Raw sample acquisition traits

/// Full-scale count of a 10-bit converter, the documented default for
/// `adc_max` configuration fields.
pub const ADC_MAX_10BIT: u16 = 1023;

/// Raw sample source
///
/// Exposes one hardware-domain acquisition in `[0, adc_max]`. The engine
/// never assumes a specific mechanism; implementations may read an ADC
/// channel, replay a captured trace, or return canned values in tests.
pub trait AdcReader {
    /// Acquire one raw sample
    fn read(&mut self) -> u16;
}

/// Conditioned sample source
///
/// Implementations produce one trusted raw value per call, typically by
/// discarding settling artifacts and averaging several acquisitions.
/// There is no failure path: a sampler always returns a value in the
/// legal raw range.
pub trait Sampler {
    /// Produce one conditioned raw sample
    ///
    /// May block the calling context for the configured settling time.
    fn sample(&mut self) -> u16;
}
