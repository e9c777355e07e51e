crate::periph! {
    /// Touch sensing controller.
    pub struct TscPeriph;

    TSC 0x4002_4000;

    /// Control register.
    CR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Touch sensing controller enable.
        TSCE { 0 1 RRRegField WWRegField }
        /// Start a new acquisition.
        START { 1 1 RRRegField WWRegField }
        /// Acquisition mode.
        AM { 2 1 RRRegField WWRegField }
        SYNCPOL { 3 1 RRRegField WWRegField }
        /// I/O default mode.
        IODEF { 4 1 RRRegField WWRegField }
        /// Max count value.
        MCV { 5 3 RRRegField WWRegField }
        /// Pulse generator prescaler.
        PGPSC { 12 3 RRRegField WWRegField }
        SSPSC { 15 1 RRRegField WWRegField }
        /// Spread spectrum enable.
        SSE { 16 1 RRRegField WWRegField }
        /// Spread spectrum deviation.
        SSD { 17 7 RRRegField WWRegField }
        /// Charge transfer pulse low.
        CTPL { 24 4 RRRegField WWRegField }
        /// Charge transfer pulse high.
        CTPH { 28 4 RRRegField WWRegField }
    }

    /// Interrupt enable register.
    IER {
        0x04 0x20 0x0000_0000 RReg WReg;
        EOAIE { 0 1 RRRegField WWRegField }
        MCEIE { 1 1 RRRegField WWRegField }
    }

    /// Interrupt clear register.
    ICR {
        0x08 0x20 0x0000_0000 RReg WReg;
        EOAIC { 0 1 RRRegField WWRegField }
        MCEIC { 1 1 RRRegField WWRegField }
    }

    /// Interrupt status register.
    ISR {
        0x0C 0x20 0x0000_0000 RReg RoReg;
        /// End of acquisition flag.
        EOAF { 0 1 RRRegField RoRRegField }
        /// Max count error flag.
        MCEF { 1 1 RRRegField RoRRegField }
    }

    /// I/O hysteresis control register.
    IOHCR {
        0x10 0x20 0xFFFF_FFFF RReg WReg;
        G1_IO1 { 0 1 RRRegField WWRegField }
        G1_IO2 { 1 1 RRRegField WWRegField }
        G1_IO3 { 2 1 RRRegField WWRegField }
        G1_IO4 { 3 1 RRRegField WWRegField }
        G2_IO1 { 4 1 RRRegField WWRegField }
        G2_IO2 { 5 1 RRRegField WWRegField }
        G2_IO3 { 6 1 RRRegField WWRegField }
        G2_IO4 { 7 1 RRRegField WWRegField }
        G3_IO1 { 8 1 RRRegField WWRegField }
        G3_IO2 { 9 1 RRRegField WWRegField }
        G3_IO3 { 10 1 RRRegField WWRegField }
        G3_IO4 { 11 1 RRRegField WWRegField }
        G4_IO1 { 12 1 RRRegField WWRegField }
        G4_IO2 { 13 1 RRRegField WWRegField }
        G4_IO3 { 14 1 RRRegField WWRegField }
        G4_IO4 { 15 1 RRRegField WWRegField }
        G5_IO1 { 16 1 RRRegField WWRegField }
        G5_IO2 { 17 1 RRRegField WWRegField }
        G5_IO3 { 18 1 RRRegField WWRegField }
        G5_IO4 { 19 1 RRRegField WWRegField }
        G6_IO1 { 20 1 RRRegField WWRegField }
        G6_IO2 { 21 1 RRRegField WWRegField }
        G6_IO3 { 22 1 RRRegField WWRegField }
        G6_IO4 { 23 1 RRRegField WWRegField }
        G7_IO1 { 24 1 RRRegField WWRegField }
        G7_IO2 { 25 1 RRRegField WWRegField }
        G7_IO3 { 26 1 RRRegField WWRegField }
        G7_IO4 { 27 1 RRRegField WWRegField }
        G8_IO1 { 28 1 RRRegField WWRegField }
        G8_IO2 { 29 1 RRRegField WWRegField }
        G8_IO3 { 30 1 RRRegField WWRegField }
        G8_IO4 { 31 1 RRRegField WWRegField }
    }

    /// I/O analog switch control register.
    IOASCR {
        0x18 0x20 0x0000_0000 RReg WReg;
        G1_IO1 { 0 1 RRRegField WWRegField }
        G1_IO2 { 1 1 RRRegField WWRegField }
        G1_IO3 { 2 1 RRRegField WWRegField }
        G1_IO4 { 3 1 RRRegField WWRegField }
        G2_IO1 { 4 1 RRRegField WWRegField }
        G2_IO2 { 5 1 RRRegField WWRegField }
        G2_IO3 { 6 1 RRRegField WWRegField }
        G2_IO4 { 7 1 RRRegField WWRegField }
        G3_IO1 { 8 1 RRRegField WWRegField }
        G3_IO2 { 9 1 RRRegField WWRegField }
        G3_IO3 { 10 1 RRRegField WWRegField }
        G3_IO4 { 11 1 RRRegField WWRegField }
        G4_IO1 { 12 1 RRRegField WWRegField }
        G4_IO2 { 13 1 RRRegField WWRegField }
        G4_IO3 { 14 1 RRRegField WWRegField }
        G4_IO4 { 15 1 RRRegField WWRegField }
        G5_IO1 { 16 1 RRRegField WWRegField }
        G5_IO2 { 17 1 RRRegField WWRegField }
        G5_IO3 { 18 1 RRRegField WWRegField }
        G5_IO4 { 19 1 RRRegField WWRegField }
        G6_IO1 { 20 1 RRRegField WWRegField }
        G6_IO2 { 21 1 RRRegField WWRegField }
        G6_IO3 { 22 1 RRRegField WWRegField }
        G6_IO4 { 23 1 RRRegField WWRegField }
        G7_IO1 { 24 1 RRRegField WWRegField }
        G7_IO2 { 25 1 RRRegField WWRegField }
        G7_IO3 { 26 1 RRRegField WWRegField }
        G7_IO4 { 27 1 RRRegField WWRegField }
        G8_IO1 { 28 1 RRRegField WWRegField }
        G8_IO2 { 29 1 RRRegField WWRegField }
        G8_IO3 { 30 1 RRRegField WWRegField }
        G8_IO4 { 31 1 RRRegField WWRegField }
    }

    /// I/O sampling control register.
    IOSCR {
        0x20 0x20 0x0000_0000 RReg WReg;
        G1_IO1 { 0 1 RRRegField WWRegField }
        G1_IO2 { 1 1 RRRegField WWRegField }
        G1_IO3 { 2 1 RRRegField WWRegField }
        G1_IO4 { 3 1 RRRegField WWRegField }
        G2_IO1 { 4 1 RRRegField WWRegField }
        G2_IO2 { 5 1 RRRegField WWRegField }
        G2_IO3 { 6 1 RRRegField WWRegField }
        G2_IO4 { 7 1 RRRegField WWRegField }
        G3_IO1 { 8 1 RRRegField WWRegField }
        G3_IO2 { 9 1 RRRegField WWRegField }
        G3_IO3 { 10 1 RRRegField WWRegField }
        G3_IO4 { 11 1 RRRegField WWRegField }
        G4_IO1 { 12 1 RRRegField WWRegField }
        G4_IO2 { 13 1 RRRegField WWRegField }
        G4_IO3 { 14 1 RRRegField WWRegField }
        G4_IO4 { 15 1 RRRegField WWRegField }
        G5_IO1 { 16 1 RRRegField WWRegField }
        G5_IO2 { 17 1 RRRegField WWRegField }
        G5_IO3 { 18 1 RRRegField WWRegField }
        G5_IO4 { 19 1 RRRegField WWRegField }
        G6_IO1 { 20 1 RRRegField WWRegField }
        G6_IO2 { 21 1 RRRegField WWRegField }
        G6_IO3 { 22 1 RRRegField WWRegField }
        G6_IO4 { 23 1 RRRegField WWRegField }
        G7_IO1 { 24 1 RRRegField WWRegField }
        G7_IO2 { 25 1 RRRegField WWRegField }
        G7_IO3 { 26 1 RRRegField WWRegField }
        G7_IO4 { 27 1 RRRegField WWRegField }
        G8_IO1 { 28 1 RRRegField WWRegField }
        G8_IO2 { 29 1 RRRegField WWRegField }
        G8_IO3 { 30 1 RRRegField WWRegField }
        G8_IO4 { 31 1 RRRegField WWRegField }
    }

    /// I/O channel control register.
    IOCCR {
        0x28 0x20 0x0000_0000 RReg WReg;
        G1_IO1 { 0 1 RRRegField WWRegField }
        G1_IO2 { 1 1 RRRegField WWRegField }
        G1_IO3 { 2 1 RRRegField WWRegField }
        G1_IO4 { 3 1 RRRegField WWRegField }
        G2_IO1 { 4 1 RRRegField WWRegField }
        G2_IO2 { 5 1 RRRegField WWRegField }
        G2_IO3 { 6 1 RRRegField WWRegField }
        G2_IO4 { 7 1 RRRegField WWRegField }
        G3_IO1 { 8 1 RRRegField WWRegField }
        G3_IO2 { 9 1 RRRegField WWRegField }
        G3_IO3 { 10 1 RRRegField WWRegField }
        G3_IO4 { 11 1 RRRegField WWRegField }
        G4_IO1 { 12 1 RRRegField WWRegField }
        G4_IO2 { 13 1 RRRegField WWRegField }
        G4_IO3 { 14 1 RRRegField WWRegField }
        G4_IO4 { 15 1 RRRegField WWRegField }
        G5_IO1 { 16 1 RRRegField WWRegField }
        G5_IO2 { 17 1 RRRegField WWRegField }
        G5_IO3 { 18 1 RRRegField WWRegField }
        G5_IO4 { 19 1 RRRegField WWRegField }
        G6_IO1 { 20 1 RRRegField WWRegField }
        G6_IO2 { 21 1 RRRegField WWRegField }
        G6_IO3 { 22 1 RRRegField WWRegField }
        G6_IO4 { 23 1 RRRegField WWRegField }
        G7_IO1 { 24 1 RRRegField WWRegField }
        G7_IO2 { 25 1 RRRegField WWRegField }
        G7_IO3 { 26 1 RRRegField WWRegField }
        G7_IO4 { 27 1 RRRegField WWRegField }
        G8_IO1 { 28 1 RRRegField WWRegField }
        G8_IO2 { 29 1 RRRegField WWRegField }
        G8_IO3 { 30 1 RRRegField WWRegField }
        G8_IO4 { 31 1 RRRegField WWRegField }
    }

    /// I/O group control status register.
    IOGCSR {
        0x30 0x20 0x0000_0000 RReg WReg;
        /// Analog I/O group x enable.
        G1E { 0 1 RRRegField WWRegField }
        G2E { 1 1 RRRegField WWRegField }
        G3E { 2 1 RRRegField WWRegField }
        G4E { 3 1 RRRegField WWRegField }
        G5E { 4 1 RRRegField WWRegField }
        G6E { 5 1 RRRegField WWRegField }
        G7E { 6 1 RRRegField WWRegField }
        G8E { 7 1 RRRegField WWRegField }
        /// Analog I/O group x status.
        G1S { 16 1 RRRegField RoRRegField }
        G2S { 17 1 RRRegField RoRRegField }
        G3S { 18 1 RRRegField RoRRegField }
        G4S { 19 1 RRRegField RoRRegField }
        G5S { 20 1 RRRegField RoRRegField }
        G6S { 21 1 RRRegField RoRRegField }
        G7S { 22 1 RRRegField RoRRegField }
        G8S { 23 1 RRRegField RoRRegField }
    }

    /// I/O group 1 counter register.
    IOG1CR {
        0x34 0x20 0x0000_0000 RReg RoReg;
        /// Counter value.
        CNT { 0 14 RRRegField RoRRegField }
    }

    /// I/O group 2 counter register.
    IOG2CR {
        0x38 0x20 0x0000_0000 RReg RoReg;
        /// Counter value.
        CNT { 0 14 RRRegField RoRRegField }
    }

    /// I/O group 3 counter register.
    IOG3CR {
        0x3C 0x20 0x0000_0000 RReg RoReg;
        /// Counter value.
        CNT { 0 14 RRRegField RoRRegField }
    }

    /// I/O group 4 counter register.
    IOG4CR {
        0x40 0x20 0x0000_0000 RReg RoReg;
        /// Counter value.
        CNT { 0 14 RRRegField RoRRegField }
    }

    /// I/O group 5 counter register.
    IOG5CR {
        0x44 0x20 0x0000_0000 RReg RoReg;
        /// Counter value.
        CNT { 0 14 RRRegField RoRRegField }
    }

    /// I/O group 6 counter register.
    IOG6CR {
        0x48 0x20 0x0000_0000 RReg RoReg;
        /// Counter value.
        CNT { 0 14 RRRegField RoRRegField }
    }

    /// I/O group 7 counter register.
    IOG7CR {
        0x4C 0x20 0x0000_0000 RReg RoReg;
        /// Counter value.
        CNT { 0 14 RRRegField RoRRegField }
    }

    /// I/O group 8 counter register.
    IOG8CR {
        0x50 0x20 0x0000_0000 RReg RoReg;
        /// Counter value.
        CNT { 0 14 RRRegField RoRRegField }
    }
}
