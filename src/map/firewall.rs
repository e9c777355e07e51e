crate::periph! {
    /// Firewall.
    pub struct FirewallPeriph;

    FIREWALL 0x4001_1C00;

    /// Code segment start address.
    CSSA {
        0x00 0x20 0x0000_0000 RReg WReg;
        ADD { 8 16 RRRegField WWRegField }
    }

    /// Code segment length.
    CSL {
        0x04 0x20 0x0000_0000 RReg WReg;
        LENG { 8 14 RRRegField WWRegField }
    }

    /// Non-volatile data segment start address.
    NVDSSA {
        0x08 0x20 0x0000_0000 RReg WReg;
        ADD { 8 16 RRRegField WWRegField }
    }

    /// Non-volatile data segment length.
    NVDSL {
        0x0C 0x20 0x0000_0000 RReg WReg;
        LENG { 8 14 RRRegField WWRegField }
    }

    /// Volatile data segment start address.
    VDSSA {
        0x10 0x20 0x0000_0000 RReg WReg;
        ADD { 6 10 RRRegField WWRegField }
    }

    /// Volatile data segment length.
    VDSL {
        0x14 0x20 0x0000_0000 RReg WReg;
        LENG { 6 10 RRRegField WWRegField }
    }

    /// Configuration register.
    CR {
        0x20 0x20 0x0000_0000 RReg WReg;
        /// Firewall pre alarm.
        FPA { 0 1 RRRegField WWRegField }
        /// Volatile data shared.
        VDS { 1 1 RRRegField WWRegField }
        /// Volatile data execution.
        VDE { 2 1 RRRegField WWRegField }
    }
}
