crate::periph! {
    /// Liquid crystal display controller.
    pub struct LcdPeriph;

    #[cfg(any(feature = "stm32l476", feature = "stm32l486"))]
    LCD 0x4000_2400;

    /// Control register.
    CR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// LCD controller enable.
        LCDEN { 0 1 RRRegField WWRegField }
        /// Voltage source selection.
        VSEL { 1 1 RRRegField WWRegField }
        /// Duty selection.
        DUTY { 2 3 RRRegField WWRegField }
        /// Bias selector.
        BIAS { 5 2 RRRegField WWRegField }
        /// Mux segment enable.
        MUX_SEG { 7 1 RRRegField WWRegField }
        /// Voltage output buffer enable.
        BUFEN { 8 1 RRRegField WWRegField }
    }

    /// Frame control register.
    FCR {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// High drive enable.
        HD { 0 1 RRRegField WWRegField }
        SOFIE { 1 1 RRRegField WWRegField }
        UDDIE { 3 1 RRRegField WWRegField }
        /// Pulse ON duration.
        PON { 4 3 RRRegField WWRegField }
        /// Dead time duration.
        DEAD { 7 3 RRRegField WWRegField }
        /// Contrast control.
        CC { 10 3 RRRegField WWRegField }
        /// Blink frequency selection.
        BLINKF { 13 3 RRRegField WWRegField }
        /// Blink mode selection.
        BLINK { 16 2 RRRegField WWRegField }
        /// DIV clock divider.
        DIV { 18 4 RRRegField WWRegField }
        /// PS 16-bit prescaler.
        PS { 22 4 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x08 0x20 0x0000_0020 RReg WReg;
        /// LCD enabled status.
        ENS { 0 1 RRRegField RoRRegField }
        /// Start of frame flag.
        SOF { 1 1 RRRegField RoRRegField }
        /// Update display request.
        UDR { 2 1 RRRegField WWRegField }
        /// Update display done.
        UDD { 3 1 RRRegField RoRRegField }
        /// Ready flag.
        RDY { 4 1 RRRegField RoRRegField }
        /// LCD frame control register synchronization flag.
        FCRSF { 5 1 RRRegField RoRRegField }
    }

    /// Clear register.
    CLR {
        0x0C 0x20 0x0000_0000 WReg WoReg;
        /// Start of frame flag clear.
        SOFC { 1 1 WWRegField WoWRegField }
        /// Update display done clear.
        UDDC { 3 1 WWRegField WoWRegField }
    }

    /// Display memory 0.
    RAM0 {
        0x14 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 1.
    RAM1 {
        0x18 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 2.
    RAM2 {
        0x1C 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 3.
    RAM3 {
        0x20 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 4.
    RAM4 {
        0x24 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 5.
    RAM5 {
        0x28 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 6.
    RAM6 {
        0x2C 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 7.
    RAM7 {
        0x30 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 8.
    RAM8 {
        0x34 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 9.
    RAM9 {
        0x38 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 10.
    RAM10 {
        0x3C 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 11.
    RAM11 {
        0x40 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 12.
    RAM12 {
        0x44 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 13.
    RAM13 {
        0x48 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 14.
    RAM14 {
        0x4C 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }

    /// Display memory 15.
    RAM15 {
        0x50 0x20 0x0000_0000 RReg WReg;
        SEGMENT_DATA { 0 32 RRRegField WWRegField }
    }
}
