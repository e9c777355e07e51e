crate::periph! {
    /// Digital camera interface.
    pub struct DcmiPeriph;

    #[cfg(any(feature = "stm32l496", feature = "stm32l4a6"))]
    DCMI 0x5005_0000;

    /// Control register.
    CR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Capture enable.
        CAPTURE { 0 1 RRRegField WWRegField }
        /// Capture mode.
        CM { 1 1 RRRegField WWRegField }
        /// Crop feature.
        CROP { 2 1 RRRegField WWRegField }
        /// JPEG format.
        JPEG { 3 1 RRRegField WWRegField }
        /// Embedded synchronization select.
        ESS { 4 1 RRRegField WWRegField }
        /// Pixel clock polarity.
        PCKPOL { 5 1 RRRegField WWRegField }
        /// Horizontal synchronization polarity.
        HSPOL { 6 1 RRRegField WWRegField }
        /// Vertical synchronization polarity.
        VSPOL { 7 1 RRRegField WWRegField }
        /// Frame capture rate control.
        FCRC { 8 2 RRRegField WWRegField }
        /// Extended data mode.
        EDM { 10 2 RRRegField WWRegField }
        /// DCMI enable.
        ENABLE { 14 1 RRRegField WWRegField }
        /// Byte select mode.
        BSM { 16 2 RRRegField WWRegField }
        /// Odd/even byte select.
        OEBS { 18 1 RRRegField WWRegField }
        /// Line select mode.
        LSM { 19 1 RRRegField WWRegField }
        /// Odd/even line select.
        OELS { 20 1 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x04 0x20 0x0000_0000 RReg RoReg;
        HSYNC { 0 1 RRRegField RoRRegField }
        VSYNC { 1 1 RRRegField RoRRegField }
        /// FIFO not empty.
        FNE { 2 1 RRRegField RoRRegField }
    }

    /// Raw interrupt status register.
    RIS {
        0x08 0x20 0x0000_0000 RReg RoReg;
        FRAME_RIS { 0 1 RRRegField RoRRegField }
        OVR_RIS { 1 1 RRRegField RoRRegField }
        ERR_RIS { 2 1 RRRegField RoRRegField }
        VSYNC_RIS { 3 1 RRRegField RoRRegField }
        LINE_RIS { 4 1 RRRegField RoRRegField }
    }

    /// Interrupt enable register.
    IER {
        0x0C 0x20 0x0000_0000 RReg WReg;
        FRAME_IE { 0 1 RRRegField WWRegField }
        OVR_IE { 1 1 RRRegField WWRegField }
        ERR_IE { 2 1 RRRegField WWRegField }
        VSYNC_IE { 3 1 RRRegField WWRegField }
        LINE_IE { 4 1 RRRegField WWRegField }
    }

    /// Masked interrupt status register.
    MIS {
        0x10 0x20 0x0000_0000 RReg RoReg;
        FRAME_MIS { 0 1 RRRegField RoRRegField }
        OVR_MIS { 1 1 RRRegField RoRRegField }
        ERR_MIS { 2 1 RRRegField RoRRegField }
        VSYNC_MIS { 3 1 RRRegField RoRRegField }
        LINE_MIS { 4 1 RRRegField RoRRegField }
    }

    /// Interrupt clear register.
    ICR {
        0x14 0x20 0x0000_0000 WReg WoReg;
        FRAME_ISC { 0 1 WWRegField WoWRegField }
        OVR_ISC { 1 1 WWRegField WoWRegField }
        ERR_ISC { 2 1 WWRegField WoWRegField }
        VSYNC_ISC { 3 1 WWRegField WoWRegField }
        LINE_ISC { 4 1 WWRegField WoWRegField }
    }

    /// Embedded synchronization code register.
    ESCR {
        0x18 0x20 0x0000_0000 RReg WReg;
        FSC { 0 8 RRRegField WWRegField }
        LSC { 8 8 RRRegField WWRegField }
        LEC { 16 8 RRRegField WWRegField }
        FEC { 24 8 RRRegField WWRegField }
    }

    /// Embedded synchronization unmask register.
    ESUR {
        0x1C 0x20 0x0000_0000 RReg WReg;
        FSU { 0 8 RRRegField WWRegField }
        LSU { 8 8 RRRegField WWRegField }
        LEU { 16 8 RRRegField WWRegField }
        FEU { 24 8 RRRegField WWRegField }
    }

    /// Crop window start.
    CWSTRT {
        0x20 0x20 0x0000_0000 RReg WReg;
        /// Horizontal offset count.
        HOFFCNT { 0 14 RRRegField WWRegField }
        /// Vertical start line count.
        VST { 16 13 RRRegField WWRegField }
    }

    /// Crop window size.
    CWSIZE {
        0x24 0x20 0x0000_0000 RReg WReg;
        /// Capture count.
        CAPCNT { 0 14 RRRegField WWRegField }
        /// Vertical line count.
        VLINE { 16 14 RRRegField WWRegField }
    }

    /// Data register.
    DR {
        0x28 0x20 0x0000_0000 RReg RoReg;
        BYTE0 { 0 8 RRRegField RoRRegField }
        BYTE1 { 8 8 RRRegField RoRRegField }
        BYTE2 { 16 8 RRRegField RoRRegField }
        BYTE3 { 24 8 RRRegField RoRRegField }
    }
}
