crate::periph! {
    /// Operational amplifiers.
    pub struct OpampPeriph;

    OPAMP 0x4000_7800;

    /// OPAMP1 control/status register.
    OPAMP1_CSR {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Operational amplifier enable.
        OPAEN { 0 1 RRRegField WWRegField }
        /// Operational amplifier low-power mode.
        OPALPM { 1 1 RRRegField WWRegField }
        OPAMODE { 2 2 RRRegField WWRegField }
        PGA_GAIN { 4 2 RRRegField WWRegField }
        VM_SEL { 8 2 RRRegField WWRegField }
        VP_SEL { 10 1 RRRegField WWRegField }
        CALON { 12 1 RRRegField WWRegField }
        CALSEL { 13 1 RRRegField WWRegField }
        USERTRIM { 14 1 RRRegField WWRegField }
        CALOUT { 15 1 RRRegField RoRRegField }
        /// Operational amplifier power supply range for stability.
        OPA_RANGE { 31 1 RRRegField WWRegField }
    }

    /// OPAMP1 offset trimming register in normal mode.
    OPAMP1_OTR {
        0x04 0x20 0x0000_0000 RReg WReg;
        TRIMOFFSETN { 0 5 RRRegField WWRegField }
        TRIMOFFSETP { 8 5 RRRegField WWRegField }
    }

    /// OPAMP1 offset trimming register in low-power mode.
    OPAMP1_LPOTR {
        0x08 0x20 0x0000_0000 RReg WReg;
        TRIMLPOFFSETN { 0 5 RRRegField WWRegField }
        TRIMLPOFFSETP { 8 5 RRRegField WWRegField }
    }

    /// OPAMP2 control/status register.
    OPAMP2_CSR {
        0x10 0x20 0x0000_0000 RReg WReg;
        /// Operational amplifier enable.
        OPAEN { 0 1 RRRegField WWRegField }
        /// Operational amplifier low-power mode.
        OPALPM { 1 1 RRRegField WWRegField }
        OPAMODE { 2 2 RRRegField WWRegField }
        PGA_GAIN { 4 2 RRRegField WWRegField }
        VM_SEL { 8 2 RRRegField WWRegField }
        VP_SEL { 10 1 RRRegField WWRegField }
        CALON { 12 1 RRRegField WWRegField }
        CALSEL { 13 1 RRRegField WWRegField }
        USERTRIM { 14 1 RRRegField WWRegField }
        CALOUT { 15 1 RRRegField RoRRegField }
    }

    /// OPAMP2 offset trimming register in normal mode.
    OPAMP2_OTR {
        0x14 0x20 0x0000_0000 RReg WReg;
        TRIMOFFSETN { 0 5 RRRegField WWRegField }
        TRIMOFFSETP { 8 5 RRRegField WWRegField }
    }

    /// OPAMP2 offset trimming register in low-power mode.
    OPAMP2_LPOTR {
        0x18 0x20 0x0000_0000 RReg WReg;
        TRIMLPOFFSETN { 0 5 RRRegField WWRegField }
        TRIMLPOFFSETP { 8 5 RRRegField WWRegField }
    }
}
