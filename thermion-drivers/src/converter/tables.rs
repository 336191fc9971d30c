//! Built-in NTC calibration tables
//!
//! Table format: `(resistance_x10, temperature_x10)` pairs, sorted by
//! decreasing resistance (increasing temperature), one entry per degree.

use thermion_core::table::CalibrationEntry;

/// NTC 10 kΩ @ 25 °C, beta 3950 K, -40.0 °C to +40.0 °C in 1 °C steps
///
/// Generated from the beta equation `R = R25 * exp(B * (1/T - 1/T25))`
/// with R25 = 10 000 Ω and B = 3950 K, the common refrigeration-range
/// thermistor. 81 entries, strictly decreasing resistance.
///
/// Validate-and-wrap with
/// [`CalibrationTable::try_new`](thermion_core::table::CalibrationTable::try_new)
/// before use; the bundled data always passes.
pub const NTC_10K_B3950: &[CalibrationEntry] = &[
    CalibrationEntry::new(4_018_597, -400),
    CalibrationEntry::new(3_738_102, -390),
    CalibrationEntry::new(3_479_326, -380),
    CalibrationEntry::new(3_240_432, -370),
    CalibrationEntry::new(3_019_752, -360),
    CalibrationEntry::new(2_815_768, -350),
    CalibrationEntry::new(2_627_100, -340),
    CalibrationEntry::new(2_452_489, -330),
    CalibrationEntry::new(2_290_790, -320),
    CalibrationEntry::new(2_140_958, -310),
    CalibrationEntry::new(2_002_039, -300),
    CalibrationEntry::new(1_873_164, -290),
    CalibrationEntry::new(1_753_536, -280),
    CalibrationEntry::new(1_642_428, -270),
    CalibrationEntry::new(1_539_176, -260),
    CalibrationEntry::new(1_443_169, -250),
    CalibrationEntry::new(1_353_851, -240),
    CalibrationEntry::new(1_270_710, -230),
    CalibrationEntry::new(1_193_276, -220),
    CalibrationEntry::new(1_121_120, -210),
    CalibrationEntry::new(1_053_847, -200),
    CalibrationEntry::new(991_093, -190),
    CalibrationEntry::new(932_524, -180),
    CalibrationEntry::new(877_834, -170),
    CalibrationEntry::new(826_740, -160),
    CalibrationEntry::new(778_981, -150),
    CalibrationEntry::new(734_319, -140),
    CalibrationEntry::new(692_531, -130),
    CalibrationEntry::new(653_415, -120),
    CalibrationEntry::new(616_781, -110),
    CalibrationEntry::new(582_457, -100),
    CalibrationEntry::new(550_282, -90),
    CalibrationEntry::new(520_106, -80),
    CalibrationEntry::new(491_794, -70),
    CalibrationEntry::new(465_218, -60),
    CalibrationEntry::new(440_260, -50),
    CalibrationEntry::new(416_813, -40),
    CalibrationEntry::new(394_773, -30),
    CalibrationEntry::new(374_049, -20),
    CalibrationEntry::new(354_554, -10),
    CalibrationEntry::new(336_206, 0),
    CalibrationEntry::new(318_931, 10),
    CalibrationEntry::new(302_660, 20),
    CalibrationEntry::new(287_328, 30),
    CalibrationEntry::new(272_875, 40),
    CalibrationEntry::new(259_246, 50),
    CalibrationEntry::new(246_387, 60),
    CalibrationEntry::new(234_251, 70),
    CalibrationEntry::new(222_793, 80),
    CalibrationEntry::new(211_971, 90),
    CalibrationEntry::new(201_746, 100),
    CalibrationEntry::new(192_080, 110),
    CalibrationEntry::new(182_941, 120),
    CalibrationEntry::new(174_296, 130),
    CalibrationEntry::new(166_115, 140),
    CalibrationEntry::new(158_371, 150),
    CalibrationEntry::new(151_039, 160),
    CalibrationEntry::new(144_092, 170),
    CalibrationEntry::new(137_510, 180),
    CalibrationEntry::new(131_270, 190),
    CalibrationEntry::new(125_353, 200),
    CalibrationEntry::new(119_741, 210),
    CalibrationEntry::new(114_415, 220),
    CalibrationEntry::new(109_360, 230),
    CalibrationEntry::new(104_559, 240),
    CalibrationEntry::new(100_000, 250),
    CalibrationEntry::new(95_668, 260),
    CalibrationEntry::new(91_551, 270),
    CalibrationEntry::new(87_636, 280),
    CalibrationEntry::new(83_913, 290),
    CalibrationEntry::new(80_371, 300),
    CalibrationEntry::new(77_001, 310),
    CalibrationEntry::new(73_793, 320),
    CalibrationEntry::new(70_738, 330),
    CalibrationEntry::new(67_828, 340),
    CalibrationEntry::new(65_055, 350),
    CalibrationEntry::new(62_413, 360),
    CalibrationEntry::new(59_894, 370),
    CalibrationEntry::new(57_492, 380),
    CalibrationEntry::new(55_201, 390),
    CalibrationEntry::new(53_015, 400),
];
