crate::periph! {
    /// Flexible static memory controller.
    pub struct FmcPeriph;

    FMC 0xA000_0000;

    /// SRAM/NOR-flash chip-select control register 1.
    BCR1 {
        0x00 0x20 0x0000_30DB RReg WReg;
        /// Memory bank enable bit.
        MBKEN { 0 1 RRRegField WWRegField }
        /// Address/data multiplexing enable bit.
        MUXEN { 1 1 RRRegField WWRegField }
        /// Memory type.
        MTYP { 2 2 RRRegField WWRegField }
        /// Memory data bus width.
        MWID { 4 2 RRRegField WWRegField }
        /// Flash access enable.
        FACCEN { 6 1 RRRegField WWRegField }
        /// Burst enable bit.
        BURSTEN { 8 1 RRRegField WWRegField }
        /// Wait signal polarity bit.
        WAITPOL { 9 1 RRRegField WWRegField }
        WAITCFG { 11 1 RRRegField WWRegField }
        /// Write enable bit.
        WREN { 12 1 RRRegField WWRegField }
        WAITEN { 13 1 RRRegField WWRegField }
        /// Extended mode enable.
        EXTMOD { 14 1 RRRegField WWRegField }
        ASYNCWAIT { 15 1 RRRegField WWRegField }
        /// CRAM page size.
        CPSIZE { 16 3 RRRegField WWRegField }
        /// Write burst enable.
        CBURSTRW { 19 1 RRRegField WWRegField }
        /// Continuous clock enable.
        CCLKEN { 20 1 RRRegField WWRegField }
        /// Write FIFO disable.
        WFDIS { 21 1 RRRegField WWRegField }
    }

    /// SRAM/NOR-flash chip-select timing register 1.
    BTR1 {
        0x04 0x20 0x0FFF_FFFF RReg WReg;
        /// Address setup phase duration.
        ADDSET { 0 4 RRRegField WWRegField }
        /// Address-hold phase duration.
        ADDHLD { 4 4 RRRegField WWRegField }
        /// Data-phase duration.
        DATAST { 8 8 RRRegField WWRegField }
        /// Bus turnaround phase duration.
        BUSTURN { 16 4 RRRegField WWRegField }
        /// Clock divide ratio.
        CLKDIV { 20 4 RRRegField WWRegField }
        /// Data latency.
        DATLAT { 24 4 RRRegField WWRegField }
        /// Access mode.
        ACCMOD { 28 2 RRRegField WWRegField }
    }

    /// SRAM/NOR-flash chip-select control register 2.
    BCR2 {
        0x08 0x20 0x0000_30D2 RReg WReg;
        /// Memory bank enable bit.
        MBKEN { 0 1 RRRegField WWRegField }
        /// Address/data multiplexing enable bit.
        MUXEN { 1 1 RRRegField WWRegField }
        /// Memory type.
        MTYP { 2 2 RRRegField WWRegField }
        /// Memory data bus width.
        MWID { 4 2 RRRegField WWRegField }
        /// Flash access enable.
        FACCEN { 6 1 RRRegField WWRegField }
        /// Burst enable bit.
        BURSTEN { 8 1 RRRegField WWRegField }
        /// Wait signal polarity bit.
        WAITPOL { 9 1 RRRegField WWRegField }
        WAITCFG { 11 1 RRRegField WWRegField }
        /// Write enable bit.
        WREN { 12 1 RRRegField WWRegField }
        WAITEN { 13 1 RRRegField WWRegField }
        /// Extended mode enable.
        EXTMOD { 14 1 RRRegField WWRegField }
        ASYNCWAIT { 15 1 RRRegField WWRegField }
        /// CRAM page size.
        CPSIZE { 16 3 RRRegField WWRegField }
        /// Write burst enable.
        CBURSTRW { 19 1 RRRegField WWRegField }
    }

    /// SRAM/NOR-flash chip-select timing register 2.
    BTR2 {
        0x0C 0x20 0x0FFF_FFFF RReg WReg;
        /// Address setup phase duration.
        ADDSET { 0 4 RRRegField WWRegField }
        /// Address-hold phase duration.
        ADDHLD { 4 4 RRRegField WWRegField }
        /// Data-phase duration.
        DATAST { 8 8 RRRegField WWRegField }
        /// Bus turnaround phase duration.
        BUSTURN { 16 4 RRRegField WWRegField }
        /// Clock divide ratio.
        CLKDIV { 20 4 RRRegField WWRegField }
        /// Data latency.
        DATLAT { 24 4 RRRegField WWRegField }
        /// Access mode.
        ACCMOD { 28 2 RRRegField WWRegField }
    }

    /// SRAM/NOR-flash chip-select control register 3.
    BCR3 {
        0x10 0x20 0x0000_30D2 RReg WReg;
        /// Memory bank enable bit.
        MBKEN { 0 1 RRRegField WWRegField }
        /// Address/data multiplexing enable bit.
        MUXEN { 1 1 RRRegField WWRegField }
        /// Memory type.
        MTYP { 2 2 RRRegField WWRegField }
        /// Memory data bus width.
        MWID { 4 2 RRRegField WWRegField }
        /// Flash access enable.
        FACCEN { 6 1 RRRegField WWRegField }
        /// Burst enable bit.
        BURSTEN { 8 1 RRRegField WWRegField }
        /// Wait signal polarity bit.
        WAITPOL { 9 1 RRRegField WWRegField }
        WAITCFG { 11 1 RRRegField WWRegField }
        /// Write enable bit.
        WREN { 12 1 RRRegField WWRegField }
        WAITEN { 13 1 RRRegField WWRegField }
        /// Extended mode enable.
        EXTMOD { 14 1 RRRegField WWRegField }
        ASYNCWAIT { 15 1 RRRegField WWRegField }
        /// CRAM page size.
        CPSIZE { 16 3 RRRegField WWRegField }
        /// Write burst enable.
        CBURSTRW { 19 1 RRRegField WWRegField }
    }

    /// SRAM/NOR-flash chip-select timing register 3.
    BTR3 {
        0x14 0x20 0x0FFF_FFFF RReg WReg;
        /// Address setup phase duration.
        ADDSET { 0 4 RRRegField WWRegField }
        /// Address-hold phase duration.
        ADDHLD { 4 4 RRRegField WWRegField }
        /// Data-phase duration.
        DATAST { 8 8 RRRegField WWRegField }
        /// Bus turnaround phase duration.
        BUSTURN { 16 4 RRRegField WWRegField }
        /// Clock divide ratio.
        CLKDIV { 20 4 RRRegField WWRegField }
        /// Data latency.
        DATLAT { 24 4 RRRegField WWRegField }
        /// Access mode.
        ACCMOD { 28 2 RRRegField WWRegField }
    }

    /// SRAM/NOR-flash chip-select control register 4.
    BCR4 {
        0x18 0x20 0x0000_30D2 RReg WReg;
        /// Memory bank enable bit.
        MBKEN { 0 1 RRRegField WWRegField }
        /// Address/data multiplexing enable bit.
        MUXEN { 1 1 RRRegField WWRegField }
        /// Memory type.
        MTYP { 2 2 RRRegField WWRegField }
        /// Memory data bus width.
        MWID { 4 2 RRRegField WWRegField }
        /// Flash access enable.
        FACCEN { 6 1 RRRegField WWRegField }
        /// Burst enable bit.
        BURSTEN { 8 1 RRRegField WWRegField }
        /// Wait signal polarity bit.
        WAITPOL { 9 1 RRRegField WWRegField }
        WAITCFG { 11 1 RRRegField WWRegField }
        /// Write enable bit.
        WREN { 12 1 RRRegField WWRegField }
        WAITEN { 13 1 RRRegField WWRegField }
        /// Extended mode enable.
        EXTMOD { 14 1 RRRegField WWRegField }
        ASYNCWAIT { 15 1 RRRegField WWRegField }
        /// CRAM page size.
        CPSIZE { 16 3 RRRegField WWRegField }
        /// Write burst enable.
        CBURSTRW { 19 1 RRRegField WWRegField }
    }

    /// SRAM/NOR-flash chip-select timing register 4.
    BTR4 {
        0x1C 0x20 0x0FFF_FFFF RReg WReg;
        /// Address setup phase duration.
        ADDSET { 0 4 RRRegField WWRegField }
        /// Address-hold phase duration.
        ADDHLD { 4 4 RRRegField WWRegField }
        /// Data-phase duration.
        DATAST { 8 8 RRRegField WWRegField }
        /// Bus turnaround phase duration.
        BUSTURN { 16 4 RRRegField WWRegField }
        /// Clock divide ratio.
        CLKDIV { 20 4 RRRegField WWRegField }
        /// Data latency.
        DATLAT { 24 4 RRRegField WWRegField }
        /// Access mode.
        ACCMOD { 28 2 RRRegField WWRegField }
    }

    /// NAND flash control register.
    PCR {
        0x80 0x20 0x0000_0018 RReg WReg;
        /// Wait feature enable bit.
        PWAITEN { 1 1 RRRegField WWRegField }
        /// NAND flash memory bank enable bit.
        PBKEN { 2 1 RRRegField WWRegField }
        /// Data bus width.
        PWID { 4 2 RRRegField WWRegField }
        /// ECC computation logic enable bit.
        ECCEN { 6 1 RRRegField WWRegField }
        /// CLE to RE delay.
        TCLR { 9 4 RRRegField WWRegField }
        /// ALE to RE delay.
        TAR { 13 4 RRRegField WWRegField }
        /// ECC page size.
        ECCPS { 17 3 RRRegField WWRegField }
    }

    /// FIFO status and interrupt register.
    SR {
        0x84 0x20 0x0000_0040 RReg WReg;
        IRS { 0 1 RRRegField WWRegField }
        ILS { 1 1 RRRegField WWRegField }
        IFS { 2 1 RRRegField WWRegField }
        IREN { 3 1 RRRegField WWRegField }
        ILEN { 4 1 RRRegField WWRegField }
        IFEN { 5 1 RRRegField WWRegField }
        /// FIFO empty.
        FEMPT { 6 1 RRRegField RoRRegField }
    }

    /// Common memory space timing register.
    PMEM {
        0x88 0x20 0xFCFC_FCFC RReg WReg;
        MEMSET { 0 8 RRRegField WWRegField }
        MEMWAIT { 8 8 RRRegField WWRegField }
        MEMHOLD { 16 8 RRRegField WWRegField }
        MEMHIZ { 24 8 RRRegField WWRegField }
    }

    /// Attribute memory space timing register.
    PATT {
        0x8C 0x20 0xFCFC_FCFC RReg WReg;
        ATTSET { 0 8 RRRegField WWRegField }
        ATTWAIT { 8 8 RRRegField WWRegField }
        ATTHOLD { 16 8 RRRegField WWRegField }
        ATTHIZ { 24 8 RRRegField WWRegField }
    }

    /// ECC result register.
    ECCR {
        0x94 0x20 0x0000_0000 RReg RoReg;
        ECC { 0 32 RRRegField RoRRegField }
    }

    /// SRAM/NOR-flash write timing register 1.
    BWTR1 {
        0x104 0x20 0x0FFF_FFFF RReg WReg;
        ADDSET { 0 4 RRRegField WWRegField }
        ADDHLD { 4 4 RRRegField WWRegField }
        DATAST { 8 8 RRRegField WWRegField }
        BUSTURN { 16 4 RRRegField WWRegField }
        ACCMOD { 28 2 RRRegField WWRegField }
    }

    /// SRAM/NOR-flash write timing register 2.
    BWTR2 {
        0x10C 0x20 0x0FFF_FFFF RReg WReg;
        ADDSET { 0 4 RRRegField WWRegField }
        ADDHLD { 4 4 RRRegField WWRegField }
        DATAST { 8 8 RRRegField WWRegField }
        BUSTURN { 16 4 RRRegField WWRegField }
        ACCMOD { 28 2 RRRegField WWRegField }
    }

    /// SRAM/NOR-flash write timing register 3.
    BWTR3 {
        0x114 0x20 0x0FFF_FFFF RReg WReg;
        ADDSET { 0 4 RRRegField WWRegField }
        ADDHLD { 4 4 RRRegField WWRegField }
        DATAST { 8 8 RRRegField WWRegField }
        BUSTURN { 16 4 RRRegField WWRegField }
        ACCMOD { 28 2 RRRegField WWRegField }
    }

    /// SRAM/NOR-flash write timing register 4.
    BWTR4 {
        0x11C 0x20 0x0FFF_FFFF RReg WReg;
        ADDSET { 0 4 RRRegField WWRegField }
        ADDHLD { 4 4 RRRegField WWRegField }
        DATAST { 8 8 RRRegField WWRegField }
        BUSTURN { 16 4 RRRegField WWRegField }
        ACCMOD { 28 2 RRRegField WWRegField }
    }
}
