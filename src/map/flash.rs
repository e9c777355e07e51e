//! Embedded flash memory interface.

crate::periph! {
    /// Embedded flash memory interface.
    pub struct FlashPeriph;

    FLASH 0x4002_2000;

    /// Access control register.
    ACR {
        0x00 0x20 0x0000_0600 RReg WReg;
        /// Latency.
        LATENCY { 0 3 RRRegField WWRegField }
        /// Prefetch enable.
        PRFTEN { 8 1 RRRegField WWRegField }
        /// Instruction cache enable.
        ICEN { 9 1 RRRegField WWRegField }
        /// Data cache enable.
        DCEN { 10 1 RRRegField WWRegField }
        /// Instruction cache reset.
        ICRST { 11 1 RRRegField WWRegField }
        /// Data cache reset.
        DCRST { 12 1 RRRegField WWRegField }
        /// Flash Power-down mode during Low-power run mode.
        RUN_PD { 13 1 RRRegField WWRegField }
        /// Flash Power-down mode during Low-power sleep mode.
        SLEEP_PD { 14 1 RRRegField WWRegField }
    }

    /// Power down key register.
    PDKEYR {
        0x04 0x20 0x0000_0000 WReg WoReg;
        PDKEYR { 0 32 WWRegField WoWRegField }
    }

    /// Key register.
    KEYR {
        0x08 0x20 0x0000_0000 WReg WoReg;
        KEYR { 0 32 WWRegField WoWRegField }
    }

    /// Option byte key register.
    OPTKEYR {
        0x0C 0x20 0x0000_0000 WReg WoReg;
        OPTKEYR { 0 32 WWRegField WoWRegField }
    }

    /// Status register.
    SR {
        0x10 0x20 0x0000_0000 RReg WReg;
        /// End of operation.
        EOP { 0 1 RRRegField WWRegField }
        /// Operation error.
        OPERR { 1 1 RRRegField WWRegField }
        PROGERR { 3 1 RRRegField WWRegField }
        WRPERR { 4 1 RRRegField WWRegField }
        PGAERR { 5 1 RRRegField WWRegField }
        SIZERR { 6 1 RRRegField WWRegField }
        PGSERR { 7 1 RRRegField WWRegField }
        MISERR { 8 1 RRRegField WWRegField }
        FASTERR { 9 1 RRRegField WWRegField }
        RDERR { 14 1 RRRegField WWRegField }
        OPTVERR { 15 1 RRRegField WWRegField }
        /// Busy.
        BSY { 16 1 RRRegField RoRRegField }
        PEMPTY { 17 1 RRRegField WWRegField }
    }

    /// Control register.
    CR {
        0x14 0x20 0xC000_0000 RReg WReg;
        /// Programming.
        PG { 0 1 RRRegField WWRegField }
        /// Page erase.
        PER { 1 1 RRRegField WWRegField }
        /// Bank 1 mass erase.
        MER1 { 2 1 RRRegField WWRegField }
        /// Page number selection.
        PNB { 3 8 RRRegField WWRegField }
        /// Page erase bank selection.
        BKER { 11 1 RRRegField WWRegField }
        /// Bank 2 mass erase.
        MER2 { 15 1 RRRegField WWRegField }
        /// Start.
        START { 16 1 RRRegField WWRegField }
        OPTSTRT { 17 1 RRRegField WWRegField }
        /// Fast programming.
        FSTPG { 18 1 RRRegField WWRegField }
        EOPIE { 24 1 RRRegField WWRegField }
        ERRIE { 25 1 RRRegField WWRegField }
        RDERRIE { 26 1 RRRegField WWRegField }
        /// Force the option byte loading.
        OBL_LAUNCH { 27 1 RRRegField WWRegField }
        /// Options lock.
        OPTLOCK { 30 1 RRRegField WWRegField }
        /// Control register lock.
        LOCK { 31 1 RRRegField WWRegField }
    }

    /// ECC register.
    ECCR {
        0x18 0x20 0x0000_0000 RReg WReg;
        ADDR_ECC { 0 19 RRRegField RoRRegField }
        BK_ECC { 19 1 RRRegField RoRRegField }
        SYSF_ECC { 20 1 RRRegField RoRRegField }
        ECCIE { 24 1 RRRegField WWRegField }
        /// ECC correction.
        ECCC { 30 1 RRRegField WWRegField }
        /// ECC detection.
        ECCD { 31 1 RRRegField WWRegField }
    }

    /// Option register.
    OPTR {
        0x20 0x20 0xFFEF_F8AA RReg WReg;
        RDP { 0 8 RRRegField WWRegField }
        BOR_LEV { 8 3 RRRegField WWRegField }
        NRST_STOP { 12 1 RRRegField WWRegField }
        NRST_STDBY { 13 1 RRRegField WWRegField }
        NRST_SHDW { 14 1 RRRegField WWRegField }
        IWDG_SW { 16 1 RRRegField WWRegField }
        IWDG_STOP { 17 1 RRRegField WWRegField }
        IWDG_STDBY { 18 1 RRRegField WWRegField }
        WWDG_SW { 19 1 RRRegField WWRegField }
        BFB2 { 20 1 RRRegField WWRegField }
        DUALBANK { 21 1 RRRegField WWRegField }
        NBOOT1 { 23 1 RRRegField WWRegField }
        SRAM2_PE { 24 1 RRRegField WWRegField }
        SRAM2_RST { 25 1 RRRegField WWRegField }
        NSWBOOT0 { 26 1 RRRegField WWRegField }
        NBOOT0 { 27 1 RRRegField WWRegField }
    }

    /// Bank 1 PCROP start address register.
    PCROP1SR {
        0x24 0x20 0xFFFF_0000 RReg WReg;
        PCROP1_STRT { 0 16 RRRegField WWRegField }
    }

    /// Bank 1 PCROP end address register.
    PCROP1ER {
        0x28 0x20 0x0FFF_0000 RReg WReg;
        PCROP1_END { 0 16 RRRegField WWRegField }
        PCROP_RDP { 31 1 RRRegField WWRegField }
    }

    /// Bank 1 WRP area A address register.
    WRP1AR {
        0x2C 0x20 0xFF00_FF00 RReg WReg;
        WRP1A_STRT { 0 8 RRRegField WWRegField }
        WRP1A_END { 16 8 RRRegField WWRegField }
    }

    /// Bank 1 WRP area B address register.
    WRP1BR {
        0x30 0x20 0xFF00_FF00 RReg WReg;
        WRP1B_STRT { 0 8 RRRegField WWRegField }
        WRP1B_END { 16 8 RRRegField WWRegField }
    }

    /// Bank 2 PCROP start address register.
    PCROP2SR {
        0x44 0x20 0xFFFF_0000 RReg WReg;
        PCROP2_STRT { 0 16 RRRegField WWRegField }
    }

    /// Bank 2 PCROP end address register.
    PCROP2ER {
        0x48 0x20 0xFFFF_0000 RReg WReg;
        PCROP2_END { 0 16 RRRegField WWRegField }
    }

    /// Bank 2 WRP area A address register.
    WRP2AR {
        0x4C 0x20 0xFF00_FF00 RReg WReg;
        WRP2A_STRT { 0 8 RRRegField WWRegField }
        WRP2A_END { 16 8 RRRegField WWRegField }
    }

    /// Bank 2 WRP area B address register.
    WRP2BR {
        0x50 0x20 0xFF00_FF00 RReg WReg;
        WRP2B_STRT { 0 8 RRRegField WWRegField }
        WRP2B_END { 16 8 RRRegField WWRegField }
    }
}
