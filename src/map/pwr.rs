//! Power control.

crate::periph! {
    /// Power control.
    pub struct PwrPeriph;

    PWR 0x4000_7000;

    /// Power control register 1.
    CR1 {
        0x00 0x20 0x0000_0200 RReg WReg;
        /// Low-power mode selection.
        LPMS { 0 3 RRRegField WWRegField }
        /// Disable backup domain write protection.
        DBP { 8 1 RRRegField WWRegField }
        /// Voltage scaling range selection.
        VOS { 9 2 RRRegField WWRegField }
        /// Low-power run.
        LPR { 14 1 RRRegField WWRegField }
    }

    /// Power control register 2.
    CR2 {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Power voltage detector enable.
        PVDE { 0 1 RRRegField WWRegField }
        /// Power voltage detector level selection.
        PLS { 1 3 RRRegField WWRegField }
        PVME1 { 4 1 RRRegField WWRegField }
        PVME2 { 5 1 RRRegField WWRegField }
        PVME3 { 6 1 RRRegField WWRegField }
        PVME4 { 7 1 RRRegField WWRegField }
        /// VDDIO2 independent I/Os supply valid.
        IOSV { 9 1 RRRegField WWRegField }
        /// VDDUSB USB supply valid.
        USV { 10 1 RRRegField WWRegField }
    }

    /// Power control register 3.
    CR3 {
        0x08 0x20 0x0000_8000 RReg WReg;
        /// Enable wakeup pin WKUP1.
        EWUP1 { 0 1 RRRegField WWRegField }
        /// Enable wakeup pin WKUP2.
        EWUP2 { 1 1 RRRegField WWRegField }
        /// Enable wakeup pin WKUP3.
        EWUP3 { 2 1 RRRegField WWRegField }
        /// Enable wakeup pin WKUP4.
        EWUP4 { 3 1 RRRegField WWRegField }
        /// Enable wakeup pin WKUP5.
        EWUP5 { 4 1 RRRegField WWRegField }
        /// SRAM2 retention in Standby mode.
        RRS { 8 1 RRRegField WWRegField }
        /// Apply pull-up and pull-down configuration.
        APC { 10 1 RRRegField WWRegField }
        /// Enable internal wakeup line.
        EIWUL { 15 1 RRRegField WWRegField }
    }

    /// Power control register 4.
    CR4 {
        0x0C 0x20 0x0000_0000 RReg WReg;
        /// Wakeup pin WKUP1 polarity.
        WP1 { 0 1 RRRegField WWRegField }
        /// Wakeup pin WKUP2 polarity.
        WP2 { 1 1 RRRegField WWRegField }
        /// Wakeup pin WKUP3 polarity.
        WP3 { 2 1 RRRegField WWRegField }
        /// Wakeup pin WKUP4 polarity.
        WP4 { 3 1 RRRegField WWRegField }
        /// Wakeup pin WKUP5 polarity.
        WP5 { 4 1 RRRegField WWRegField }
        /// VBAT battery charging enable.
        VBE { 8 1 RRRegField WWRegField }
        /// VBAT battery charging resistor selection.
        VBRS { 9 1 RRRegField WWRegField }
    }

    /// Power status register 1.
    SR1 {
        0x10 0x20 0x0000_0000 RReg RoReg;
        /// Wakeup flag 1.
        WUF1 { 0 1 RRRegField RoRRegField }
        /// Wakeup flag 2.
        WUF2 { 1 1 RRRegField RoRRegField }
        /// Wakeup flag 3.
        WUF3 { 2 1 RRRegField RoRRegField }
        /// Wakeup flag 4.
        WUF4 { 3 1 RRRegField RoRRegField }
        /// Wakeup flag 5.
        WUF5 { 4 1 RRRegField RoRRegField }
        /// Standby flag.
        SBF { 8 1 RRRegField RoRRegField }
        /// Wakeup flag internal.
        WUFI { 15 1 RRRegField RoRRegField }
    }

    /// Power status register 2.
    SR2 {
        0x14 0x20 0x0000_0000 RReg RoReg;
        REGLPS { 8 1 RRRegField RoRRegField }
        REGLPF { 9 1 RRRegField RoRRegField }
        VOSF { 10 1 RRRegField RoRRegField }
        PVDO { 11 1 RRRegField RoRRegField }
        PVMO1 { 12 1 RRRegField RoRRegField }
        PVMO2 { 13 1 RRRegField RoRRegField }
        PVMO3 { 14 1 RRRegField RoRRegField }
        PVMO4 { 15 1 RRRegField RoRRegField }
    }

    /// Power status clear register.
    SCR {
        0x18 0x20 0x0000_0000 WReg WoReg;
        /// Clear wakeup flag 1.
        CWUF1 { 0 1 WWRegField WoWRegField }
        /// Clear wakeup flag 2.
        CWUF2 { 1 1 WWRegField WoWRegField }
        /// Clear wakeup flag 3.
        CWUF3 { 2 1 WWRegField WoWRegField }
        /// Clear wakeup flag 4.
        CWUF4 { 3 1 WWRegField WoWRegField }
        /// Clear wakeup flag 5.
        CWUF5 { 4 1 WWRegField WoWRegField }
        /// Clear standby flag.
        CSBF { 8 1 WWRegField WoWRegField }
    }

    /// Power port A pull-up control register.
    PUCRA {
        0x20 0x20 0x0000_0000 RReg WReg;
        PU0 { 0 1 RRRegField WWRegField }
        PU1 { 1 1 RRRegField WWRegField }
        PU2 { 2 1 RRRegField WWRegField }
        PU3 { 3 1 RRRegField WWRegField }
        PU4 { 4 1 RRRegField WWRegField }
        PU5 { 5 1 RRRegField WWRegField }
        PU6 { 6 1 RRRegField WWRegField }
        PU7 { 7 1 RRRegField WWRegField }
        PU8 { 8 1 RRRegField WWRegField }
        PU9 { 9 1 RRRegField WWRegField }
        PU10 { 10 1 RRRegField WWRegField }
        PU11 { 11 1 RRRegField WWRegField }
        PU12 { 12 1 RRRegField WWRegField }
        PU13 { 13 1 RRRegField WWRegField }
        PU14 { 14 1 RRRegField WWRegField }
        PU15 { 15 1 RRRegField WWRegField }
    }

    /// Power port A pull-down control register.
    PDCRA {
        0x24 0x20 0x0000_0000 RReg WReg;
        PD0 { 0 1 RRRegField WWRegField }
        PD1 { 1 1 RRRegField WWRegField }
        PD2 { 2 1 RRRegField WWRegField }
        PD3 { 3 1 RRRegField WWRegField }
        PD4 { 4 1 RRRegField WWRegField }
        PD5 { 5 1 RRRegField WWRegField }
        PD6 { 6 1 RRRegField WWRegField }
        PD7 { 7 1 RRRegField WWRegField }
        PD8 { 8 1 RRRegField WWRegField }
        PD9 { 9 1 RRRegField WWRegField }
        PD10 { 10 1 RRRegField WWRegField }
        PD11 { 11 1 RRRegField WWRegField }
        PD12 { 12 1 RRRegField WWRegField }
        PD13 { 13 1 RRRegField WWRegField }
        PD14 { 14 1 RRRegField WWRegField }
        PD15 { 15 1 RRRegField WWRegField }
    }

    /// Power port B pull-up control register.
    PUCRB {
        0x28 0x20 0x0000_0000 RReg WReg;
        PU0 { 0 1 RRRegField WWRegField }
        PU1 { 1 1 RRRegField WWRegField }
        PU2 { 2 1 RRRegField WWRegField }
        PU3 { 3 1 RRRegField WWRegField }
        PU4 { 4 1 RRRegField WWRegField }
        PU5 { 5 1 RRRegField WWRegField }
        PU6 { 6 1 RRRegField WWRegField }
        PU7 { 7 1 RRRegField WWRegField }
        PU8 { 8 1 RRRegField WWRegField }
        PU9 { 9 1 RRRegField WWRegField }
        PU10 { 10 1 RRRegField WWRegField }
        PU11 { 11 1 RRRegField WWRegField }
        PU12 { 12 1 RRRegField WWRegField }
        PU13 { 13 1 RRRegField WWRegField }
        PU14 { 14 1 RRRegField WWRegField }
        PU15 { 15 1 RRRegField WWRegField }
    }

    /// Power port B pull-down control register.
    PDCRB {
        0x2C 0x20 0x0000_0000 RReg WReg;
        PD0 { 0 1 RRRegField WWRegField }
        PD1 { 1 1 RRRegField WWRegField }
        PD2 { 2 1 RRRegField WWRegField }
        PD3 { 3 1 RRRegField WWRegField }
        PD4 { 4 1 RRRegField WWRegField }
        PD5 { 5 1 RRRegField WWRegField }
        PD6 { 6 1 RRRegField WWRegField }
        PD7 { 7 1 RRRegField WWRegField }
        PD8 { 8 1 RRRegField WWRegField }
        PD9 { 9 1 RRRegField WWRegField }
        PD10 { 10 1 RRRegField WWRegField }
        PD11 { 11 1 RRRegField WWRegField }
        PD12 { 12 1 RRRegField WWRegField }
        PD13 { 13 1 RRRegField WWRegField }
        PD14 { 14 1 RRRegField WWRegField }
        PD15 { 15 1 RRRegField WWRegField }
    }

    /// Power port C pull-up control register.
    PUCRC {
        0x30 0x20 0x0000_0000 RReg WReg;
        PU0 { 0 1 RRRegField WWRegField }
        PU1 { 1 1 RRRegField WWRegField }
        PU2 { 2 1 RRRegField WWRegField }
        PU3 { 3 1 RRRegField WWRegField }
        PU4 { 4 1 RRRegField WWRegField }
        PU5 { 5 1 RRRegField WWRegField }
        PU6 { 6 1 RRRegField WWRegField }
        PU7 { 7 1 RRRegField WWRegField }
        PU8 { 8 1 RRRegField WWRegField }
        PU9 { 9 1 RRRegField WWRegField }
        PU10 { 10 1 RRRegField WWRegField }
        PU11 { 11 1 RRRegField WWRegField }
        PU12 { 12 1 RRRegField WWRegField }
        PU13 { 13 1 RRRegField WWRegField }
        PU14 { 14 1 RRRegField WWRegField }
        PU15 { 15 1 RRRegField WWRegField }
    }

    /// Power port C pull-down control register.
    PDCRC {
        0x34 0x20 0x0000_0000 RReg WReg;
        PD0 { 0 1 RRRegField WWRegField }
        PD1 { 1 1 RRRegField WWRegField }
        PD2 { 2 1 RRRegField WWRegField }
        PD3 { 3 1 RRRegField WWRegField }
        PD4 { 4 1 RRRegField WWRegField }
        PD5 { 5 1 RRRegField WWRegField }
        PD6 { 6 1 RRRegField WWRegField }
        PD7 { 7 1 RRRegField WWRegField }
        PD8 { 8 1 RRRegField WWRegField }
        PD9 { 9 1 RRRegField WWRegField }
        PD10 { 10 1 RRRegField WWRegField }
        PD11 { 11 1 RRRegField WWRegField }
        PD12 { 12 1 RRRegField WWRegField }
        PD13 { 13 1 RRRegField WWRegField }
        PD14 { 14 1 RRRegField WWRegField }
        PD15 { 15 1 RRRegField WWRegField }
    }

    /// Power port D pull-up control register.
    PUCRD {
        0x38 0x20 0x0000_0000 RReg WReg;
        PU0 { 0 1 RRRegField WWRegField }
        PU1 { 1 1 RRRegField WWRegField }
        PU2 { 2 1 RRRegField WWRegField }
        PU3 { 3 1 RRRegField WWRegField }
        PU4 { 4 1 RRRegField WWRegField }
        PU5 { 5 1 RRRegField WWRegField }
        PU6 { 6 1 RRRegField WWRegField }
        PU7 { 7 1 RRRegField WWRegField }
        PU8 { 8 1 RRRegField WWRegField }
        PU9 { 9 1 RRRegField WWRegField }
        PU10 { 10 1 RRRegField WWRegField }
        PU11 { 11 1 RRRegField WWRegField }
        PU12 { 12 1 RRRegField WWRegField }
        PU13 { 13 1 RRRegField WWRegField }
        PU14 { 14 1 RRRegField WWRegField }
        PU15 { 15 1 RRRegField WWRegField }
    }

    /// Power port D pull-down control register.
    PDCRD {
        0x3C 0x20 0x0000_0000 RReg WReg;
        PD0 { 0 1 RRRegField WWRegField }
        PD1 { 1 1 RRRegField WWRegField }
        PD2 { 2 1 RRRegField WWRegField }
        PD3 { 3 1 RRRegField WWRegField }
        PD4 { 4 1 RRRegField WWRegField }
        PD5 { 5 1 RRRegField WWRegField }
        PD6 { 6 1 RRRegField WWRegField }
        PD7 { 7 1 RRRegField WWRegField }
        PD8 { 8 1 RRRegField WWRegField }
        PD9 { 9 1 RRRegField WWRegField }
        PD10 { 10 1 RRRegField WWRegField }
        PD11 { 11 1 RRRegField WWRegField }
        PD12 { 12 1 RRRegField WWRegField }
        PD13 { 13 1 RRRegField WWRegField }
        PD14 { 14 1 RRRegField WWRegField }
        PD15 { 15 1 RRRegField WWRegField }
    }

    /// Power port E pull-up control register.
    PUCRE {
        0x40 0x20 0x0000_0000 RReg WReg;
        PU0 { 0 1 RRRegField WWRegField }
        PU1 { 1 1 RRRegField WWRegField }
        PU2 { 2 1 RRRegField WWRegField }
        PU3 { 3 1 RRRegField WWRegField }
        PU4 { 4 1 RRRegField WWRegField }
        PU5 { 5 1 RRRegField WWRegField }
        PU6 { 6 1 RRRegField WWRegField }
        PU7 { 7 1 RRRegField WWRegField }
        PU8 { 8 1 RRRegField WWRegField }
        PU9 { 9 1 RRRegField WWRegField }
        PU10 { 10 1 RRRegField WWRegField }
        PU11 { 11 1 RRRegField WWRegField }
        PU12 { 12 1 RRRegField WWRegField }
        PU13 { 13 1 RRRegField WWRegField }
        PU14 { 14 1 RRRegField WWRegField }
        PU15 { 15 1 RRRegField WWRegField }
    }

    /// Power port E pull-down control register.
    PDCRE {
        0x44 0x20 0x0000_0000 RReg WReg;
        PD0 { 0 1 RRRegField WWRegField }
        PD1 { 1 1 RRRegField WWRegField }
        PD2 { 2 1 RRRegField WWRegField }
        PD3 { 3 1 RRRegField WWRegField }
        PD4 { 4 1 RRRegField WWRegField }
        PD5 { 5 1 RRRegField WWRegField }
        PD6 { 6 1 RRRegField WWRegField }
        PD7 { 7 1 RRRegField WWRegField }
        PD8 { 8 1 RRRegField WWRegField }
        PD9 { 9 1 RRRegField WWRegField }
        PD10 { 10 1 RRRegField WWRegField }
        PD11 { 11 1 RRRegField WWRegField }
        PD12 { 12 1 RRRegField WWRegField }
        PD13 { 13 1 RRRegField WWRegField }
        PD14 { 14 1 RRRegField WWRegField }
        PD15 { 15 1 RRRegField WWRegField }
    }

    /// Power port F pull-up control register.
    PUCRF {
        0x48 0x20 0x0000_0000 RReg WReg;
        PU0 { 0 1 RRRegField WWRegField }
        PU1 { 1 1 RRRegField WWRegField }
        PU2 { 2 1 RRRegField WWRegField }
        PU3 { 3 1 RRRegField WWRegField }
        PU4 { 4 1 RRRegField WWRegField }
        PU5 { 5 1 RRRegField WWRegField }
        PU6 { 6 1 RRRegField WWRegField }
        PU7 { 7 1 RRRegField WWRegField }
        PU8 { 8 1 RRRegField WWRegField }
        PU9 { 9 1 RRRegField WWRegField }
        PU10 { 10 1 RRRegField WWRegField }
        PU11 { 11 1 RRRegField WWRegField }
        PU12 { 12 1 RRRegField WWRegField }
        PU13 { 13 1 RRRegField WWRegField }
        PU14 { 14 1 RRRegField WWRegField }
        PU15 { 15 1 RRRegField WWRegField }
    }

    /// Power port F pull-down control register.
    PDCRF {
        0x4C 0x20 0x0000_0000 RReg WReg;
        PD0 { 0 1 RRRegField WWRegField }
        PD1 { 1 1 RRRegField WWRegField }
        PD2 { 2 1 RRRegField WWRegField }
        PD3 { 3 1 RRRegField WWRegField }
        PD4 { 4 1 RRRegField WWRegField }
        PD5 { 5 1 RRRegField WWRegField }
        PD6 { 6 1 RRRegField WWRegField }
        PD7 { 7 1 RRRegField WWRegField }
        PD8 { 8 1 RRRegField WWRegField }
        PD9 { 9 1 RRRegField WWRegField }
        PD10 { 10 1 RRRegField WWRegField }
        PD11 { 11 1 RRRegField WWRegField }
        PD12 { 12 1 RRRegField WWRegField }
        PD13 { 13 1 RRRegField WWRegField }
        PD14 { 14 1 RRRegField WWRegField }
        PD15 { 15 1 RRRegField WWRegField }
    }

    /// Power port G pull-up control register.
    PUCRG {
        0x50 0x20 0x0000_0000 RReg WReg;
        PU0 { 0 1 RRRegField WWRegField }
        PU1 { 1 1 RRRegField WWRegField }
        PU2 { 2 1 RRRegField WWRegField }
        PU3 { 3 1 RRRegField WWRegField }
        PU4 { 4 1 RRRegField WWRegField }
        PU5 { 5 1 RRRegField WWRegField }
        PU6 { 6 1 RRRegField WWRegField }
        PU7 { 7 1 RRRegField WWRegField }
        PU8 { 8 1 RRRegField WWRegField }
        PU9 { 9 1 RRRegField WWRegField }
        PU10 { 10 1 RRRegField WWRegField }
        PU11 { 11 1 RRRegField WWRegField }
        PU12 { 12 1 RRRegField WWRegField }
        PU13 { 13 1 RRRegField WWRegField }
        PU14 { 14 1 RRRegField WWRegField }
        PU15 { 15 1 RRRegField WWRegField }
    }

    /// Power port G pull-down control register.
    PDCRG {
        0x54 0x20 0x0000_0000 RReg WReg;
        PD0 { 0 1 RRRegField WWRegField }
        PD1 { 1 1 RRRegField WWRegField }
        PD2 { 2 1 RRRegField WWRegField }
        PD3 { 3 1 RRRegField WWRegField }
        PD4 { 4 1 RRRegField WWRegField }
        PD5 { 5 1 RRRegField WWRegField }
        PD6 { 6 1 RRRegField WWRegField }
        PD7 { 7 1 RRRegField WWRegField }
        PD8 { 8 1 RRRegField WWRegField }
        PD9 { 9 1 RRRegField WWRegField }
        PD10 { 10 1 RRRegField WWRegField }
        PD11 { 11 1 RRRegField WWRegField }
        PD12 { 12 1 RRRegField WWRegField }
        PD13 { 13 1 RRRegField WWRegField }
        PD14 { 14 1 RRRegField WWRegField }
        PD15 { 15 1 RRRegField WWRegField }
    }

    /// Power port H pull-up control register.
    PUCRH {
        0x58 0x20 0x0000_0000 RReg WReg;
        PU0 { 0 1 RRRegField WWRegField }
        PU1 { 1 1 RRRegField WWRegField }
        PU2 { 2 1 RRRegField WWRegField }
        PU3 { 3 1 RRRegField WWRegField }
        PU4 { 4 1 RRRegField WWRegField }
        PU5 { 5 1 RRRegField WWRegField }
        PU6 { 6 1 RRRegField WWRegField }
        PU7 { 7 1 RRRegField WWRegField }
        PU8 { 8 1 RRRegField WWRegField }
        PU9 { 9 1 RRRegField WWRegField }
        PU10 { 10 1 RRRegField WWRegField }
        PU11 { 11 1 RRRegField WWRegField }
        PU12 { 12 1 RRRegField WWRegField }
        PU13 { 13 1 RRRegField WWRegField }
        PU14 { 14 1 RRRegField WWRegField }
        PU15 { 15 1 RRRegField WWRegField }
    }

    /// Power port H pull-down control register.
    PDCRH {
        0x5C 0x20 0x0000_0000 RReg WReg;
        PD0 { 0 1 RRRegField WWRegField }
        PD1 { 1 1 RRRegField WWRegField }
        PD2 { 2 1 RRRegField WWRegField }
        PD3 { 3 1 RRRegField WWRegField }
        PD4 { 4 1 RRRegField WWRegField }
        PD5 { 5 1 RRRegField WWRegField }
        PD6 { 6 1 RRRegField WWRegField }
        PD7 { 7 1 RRRegField WWRegField }
        PD8 { 8 1 RRRegField WWRegField }
        PD9 { 9 1 RRRegField WWRegField }
        PD10 { 10 1 RRRegField WWRegField }
        PD11 { 11 1 RRRegField WWRegField }
        PD12 { 12 1 RRRegField WWRegField }
        PD13 { 13 1 RRRegField WWRegField }
        PD14 { 14 1 RRRegField WWRegField }
        PD15 { 15 1 RRRegField WWRegField }
    }

    /// Power port I pull-up control register.
    PUCRI {
        0x60 0x20 0x0000_0000 RReg WReg;
        PU0 { 0 1 RRRegField WWRegField }
        PU1 { 1 1 RRRegField WWRegField }
        PU2 { 2 1 RRRegField WWRegField }
        PU3 { 3 1 RRRegField WWRegField }
        PU4 { 4 1 RRRegField WWRegField }
        PU5 { 5 1 RRRegField WWRegField }
        PU6 { 6 1 RRRegField WWRegField }
        PU7 { 7 1 RRRegField WWRegField }
        PU8 { 8 1 RRRegField WWRegField }
        PU9 { 9 1 RRRegField WWRegField }
        PU10 { 10 1 RRRegField WWRegField }
        PU11 { 11 1 RRRegField WWRegField }
        PU12 { 12 1 RRRegField WWRegField }
        PU13 { 13 1 RRRegField WWRegField }
        PU14 { 14 1 RRRegField WWRegField }
        PU15 { 15 1 RRRegField WWRegField }
    }

    /// Power port I pull-down control register.
    PDCRI {
        0x64 0x20 0x0000_0000 RReg WReg;
        PD0 { 0 1 RRRegField WWRegField }
        PD1 { 1 1 RRRegField WWRegField }
        PD2 { 2 1 RRRegField WWRegField }
        PD3 { 3 1 RRRegField WWRegField }
        PD4 { 4 1 RRRegField WWRegField }
        PD5 { 5 1 RRRegField WWRegField }
        PD6 { 6 1 RRRegField WWRegField }
        PD7 { 7 1 RRRegField WWRegField }
        PD8 { 8 1 RRRegField WWRegField }
        PD9 { 9 1 RRRegField WWRegField }
        PD10 { 10 1 RRRegField WWRegField }
        PD11 { 11 1 RRRegField WWRegField }
        PD12 { 12 1 RRRegField WWRegField }
        PD13 { 13 1 RRRegField WWRegField }
        PD14 { 14 1 RRRegField WWRegField }
        PD15 { 15 1 RRRegField WWRegField }
    }
}
