//! Digital-to-analog converter.

crate::periph! {
    /// Digital-to-analog converter.
    pub struct DacPeriph;

    DAC1 0x4000_7400;

    /// Control register.
    CR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// DAC channel 1 enable.
        EN1 { 0 1 RRRegField WWRegField }
        TEN1 { 2 1 RRRegField WWRegField }
        TSEL1 { 3 3 RRRegField WWRegField }
        WAVE1 { 6 2 RRRegField WWRegField }
        MAMP1 { 8 4 RRRegField WWRegField }
        DMAEN1 { 12 1 RRRegField WWRegField }
        DMAUDRIE1 { 13 1 RRRegField WWRegField }
        CEN1 { 14 1 RRRegField WWRegField }
        /// DAC channel 2 enable.
        EN2 { 16 1 RRRegField WWRegField }
        TEN2 { 18 1 RRRegField WWRegField }
        TSEL2 { 19 3 RRRegField WWRegField }
        WAVE2 { 22 2 RRRegField WWRegField }
        MAMP2 { 24 4 RRRegField WWRegField }
        DMAEN2 { 28 1 RRRegField WWRegField }
        DMAUDRIE2 { 29 1 RRRegField WWRegField }
        CEN2 { 30 1 RRRegField WWRegField }
    }

    /// Software trigger register.
    SWTRGR {
        0x04 0x20 0x0000_0000 WReg WoReg;
        SWTRIG1 { 0 1 WWRegField WoWRegField }
        SWTRIG2 { 1 1 WWRegField WoWRegField }
    }

    /// Channel 1 12-bit right-aligned data holding register.
    DHR12R1 {
        0x08 0x20 0x0000_0000 RReg WReg;
        DACC1DHR { 0 12 RRRegField WWRegField }
    }

    /// Channel 1 12-bit left-aligned data holding register.
    DHR12L1 {
        0x0C 0x20 0x0000_0000 RReg WReg;
        DACC1DHR { 4 12 RRRegField WWRegField }
    }

    /// Channel 1 8-bit right-aligned data holding register.
    DHR8R1 {
        0x10 0x20 0x0000_0000 RReg WReg;
        DACC1DHR { 0 8 RRRegField WWRegField }
    }

    /// Channel 2 12-bit right-aligned data holding register.
    DHR12R2 {
        0x14 0x20 0x0000_0000 RReg WReg;
        DACC2DHR { 0 12 RRRegField WWRegField }
    }

    /// Channel 2 12-bit left-aligned data holding register.
    DHR12L2 {
        0x18 0x20 0x0000_0000 RReg WReg;
        DACC2DHR { 4 12 RRRegField WWRegField }
    }

    /// Channel 2 8-bit right-aligned data holding register.
    DHR8R2 {
        0x1C 0x20 0x0000_0000 RReg WReg;
        DACC2DHR { 0 8 RRRegField WWRegField }
    }

    /// Dual 12-bit right-aligned data holding register.
    DHR12RD {
        0x20 0x20 0x0000_0000 RReg WReg;
        DACC1DHR { 0 12 RRRegField WWRegField }
        DACC2DHR { 16 12 RRRegField WWRegField }
    }

    /// Dual 12-bit left-aligned data holding register.
    DHR12LD {
        0x24 0x20 0x0000_0000 RReg WReg;
        DACC1DHR { 4 12 RRRegField WWRegField }
        DACC2DHR { 20 12 RRRegField WWRegField }
    }

    /// Dual 8-bit right-aligned data holding register.
    DHR8RD {
        0x28 0x20 0x0000_0000 RReg WReg;
        DACC1DHR { 0 8 RRRegField WWRegField }
        DACC2DHR { 8 8 RRRegField WWRegField }
    }

    /// Channel 1 data output register.
    DOR1 {
        0x2C 0x20 0x0000_0000 RReg RoReg;
        DACC1DOR { 0 12 RRRegField RoRRegField }
    }

    /// Channel 2 data output register.
    DOR2 {
        0x30 0x20 0x0000_0000 RReg RoReg;
        DACC2DOR { 0 12 RRRegField RoRRegField }
    }

    /// Status register.
    SR {
        0x34 0x20 0x0000_0000 RReg WReg;
        /// DAC channel 1 DMA underrun flag.
        DMAUDR1 { 13 1 RRRegField WWRegField }
        CAL_FLAG1 { 14 1 RRRegField RoRRegField }
        BWST1 { 15 1 RRRegField RoRRegField }
        /// DAC channel 2 DMA underrun flag.
        DMAUDR2 { 29 1 RRRegField WWRegField }
        CAL_FLAG2 { 30 1 RRRegField RoRRegField }
        BWST2 { 31 1 RRRegField RoRRegField }
    }

    /// Calibration control register.
    CCR {
        0x38 0x20 0x0000_0000 RReg WReg;
        OTRIM1 { 0 5 RRRegField WWRegField }
        OTRIM2 { 16 5 RRRegField WWRegField }
    }

    /// Mode control register.
    MCR {
        0x3C 0x20 0x0000_0000 RReg WReg;
        /// DAC channel 1 mode.
        MODE1 { 0 3 RRRegField WWRegField }
        /// DAC channel 2 mode.
        MODE2 { 16 3 RRRegField WWRegField }
    }

    /// Sample and Hold sample time register 1.
    SHSR1 {
        0x40 0x20 0x0000_0000 RReg WReg;
        TSAMPLE1 { 0 10 RRRegField WWRegField }
    }

    /// Sample and Hold sample time register 2.
    SHSR2 {
        0x44 0x20 0x0000_0000 RReg WReg;
        TSAMPLE2 { 0 10 RRRegField WWRegField }
    }

    /// Sample and Hold hold time register.
    SHHR {
        0x48 0x20 0x0001_0001 RReg WReg;
        THOLD1 { 0 10 RRRegField WWRegField }
        THOLD2 { 16 10 RRRegField WWRegField }
    }

    /// Sample and Hold refresh time register.
    SHRR {
        0x4C 0x20 0x0001_0001 RReg WReg;
        TREFRESH1 { 0 8 RRRegField WWRegField }
        TREFRESH2 { 16 8 RRRegField WWRegField }
    }
}
