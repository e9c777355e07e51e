crate::periph! {
    /// Secure digital input/output and MultiMediaCard interface.
    pub struct SdmmcPeriph;

    SDMMC1 0x4001_2800;

    /// Power control register.
    POWER {
        0x00 0x20 0x0000_0000 RReg WReg;
        /// Power supply control bits.
        PWRCTRL { 0 2 RRRegField WWRegField }
    }

    /// Clock control register.
    CLKCR {
        0x04 0x20 0x0000_0000 RReg WReg;
        /// Clock divide factor.
        CLKDIV { 0 8 RRRegField WWRegField }
        /// Clock enable bit.
        CLKEN { 8 1 RRRegField WWRegField }
        /// Power saving configuration bit.
        PWRSAV { 9 1 RRRegField WWRegField }
        /// Clock divider bypass enable bit.
        BYPASS { 10 1 RRRegField WWRegField }
        /// Wide bus mode enable bit.
        WIDBUS { 11 2 RRRegField WWRegField }
        NEGEDGE { 13 1 RRRegField WWRegField }
        HWFC_EN { 14 1 RRRegField WWRegField }
    }

    /// Argument register.
    ARG {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Command argument.
        CMDARG { 0 32 RRRegField WWRegField }
    }

    /// Command register.
    CMD {
        0x0C 0x20 0x0000_0000 RReg WReg;
        /// Command index.
        CMDINDEX { 0 6 RRRegField WWRegField }
        /// Wait for response bits.
        WAITRESP { 6 2 RRRegField WWRegField }
        WAITINT { 8 1 RRRegField WWRegField }
        WAITPEND { 9 1 RRRegField WWRegField }
        /// Command path state machine enable.
        CPSMEN { 10 1 RRRegField WWRegField }
        SDIOSUSPEND { 11 1 RRRegField WWRegField }
    }

    /// Command response register.
    RESPCMD {
        0x10 0x20 0x0000_0000 RReg RoReg;
        /// Response command index.
        RESPCMD { 0 6 RRRegField RoRRegField }
    }

    /// Response 1 register.
    RESP1 {
        0x14 0x20 0x0000_0000 RReg RoReg;
        CARDSTATUS { 0 32 RRRegField RoRRegField }
    }

    /// Response 2 register.
    RESP2 {
        0x18 0x20 0x0000_0000 RReg RoReg;
        CARDSTATUS { 0 32 RRRegField RoRRegField }
    }

    /// Response 3 register.
    RESP3 {
        0x1C 0x20 0x0000_0000 RReg RoReg;
        CARDSTATUS { 0 32 RRRegField RoRRegField }
    }

    /// Response 4 register.
    RESP4 {
        0x20 0x20 0x0000_0000 RReg RoReg;
        CARDSTATUS { 0 32 RRRegField RoRRegField }
    }

    /// Data timer register.
    DTIMER {
        0x24 0x20 0x0000_0000 RReg WReg;
        /// Data timeout period.
        DATATIME { 0 32 RRRegField WWRegField }
    }

    /// Data length register.
    DLEN {
        0x28 0x20 0x0000_0000 RReg WReg;
        /// Data length value.
        DATALENGTH { 0 25 RRRegField WWRegField }
    }

    /// Data control register.
    DCTRL {
        0x2C 0x20 0x0000_0000 RReg WReg;
        /// Data transfer enabled bit.
        DTEN { 0 1 RRRegField WWRegField }
        /// Data transfer direction selection.
        DTDIR { 1 1 RRRegField WWRegField }
        /// Data transfer mode selection.
        DTMODE { 2 1 RRRegField WWRegField }
        /// DMA enable bit.
        DMAEN { 3 1 RRRegField WWRegField }
        /// Data block size.
        DBLOCKSIZE { 4 4 RRRegField WWRegField }
        RWSTART { 8 1 RRRegField WWRegField }
        RWSTOP { 9 1 RRRegField WWRegField }
        RWMOD { 10 1 RRRegField WWRegField }
        SDIOEN { 11 1 RRRegField WWRegField }
    }

    /// Data counter register.
    DCOUNT {
        0x30 0x20 0x0000_0000 RReg RoReg;
        DATACOUNT { 0 25 RRRegField RoRRegField }
    }

    /// Status register.
    STA {
        0x34 0x20 0x0000_0000 RReg RoReg;
        CCRCFAIL { 0 1 RRRegField RoRRegField }
        DCRCFAIL { 1 1 RRRegField RoRRegField }
        CTIMEOUT { 2 1 RRRegField RoRRegField }
        DTIMEOUT { 3 1 RRRegField RoRRegField }
        TXUNDERR { 4 1 RRRegField RoRRegField }
        RXOVERR { 5 1 RRRegField RoRRegField }
        CMDREND { 6 1 RRRegField RoRRegField }
        CMDSENT { 7 1 RRRegField RoRRegField }
        DATAEND { 8 1 RRRegField RoRRegField }
        DBCKEND { 10 1 RRRegField RoRRegField }
        CMDACT { 11 1 RRRegField RoRRegField }
        TXACT { 12 1 RRRegField RoRRegField }
        RXACT { 13 1 RRRegField RoRRegField }
        TXFIFOHE { 14 1 RRRegField RoRRegField }
        RXFIFOHF { 15 1 RRRegField RoRRegField }
        TXFIFOF { 16 1 RRRegField RoRRegField }
        RXFIFOF { 17 1 RRRegField RoRRegField }
        TXFIFOE { 18 1 RRRegField RoRRegField }
        RXFIFOE { 19 1 RRRegField RoRRegField }
        TXDAVL { 20 1 RRRegField RoRRegField }
        RXDAVL { 21 1 RRRegField RoRRegField }
        SDIOIT { 22 1 RRRegField RoRRegField }
    }

    /// Interrupt clear register.
    ICR {
        0x38 0x20 0x0000_0000 RReg WReg;
        CCRCFAILC { 0 1 RRRegField WWRegField }
        DCRCFAILC { 1 1 RRRegField WWRegField }
        CTIMEOUTC { 2 1 RRRegField WWRegField }
        DTIMEOUTC { 3 1 RRRegField WWRegField }
        TXUNDERRC { 4 1 RRRegField WWRegField }
        RXOVERRC { 5 1 RRRegField WWRegField }
        CMDRENDC { 6 1 RRRegField WWRegField }
        CMDSENTC { 7 1 RRRegField WWRegField }
        DATAENDC { 8 1 RRRegField WWRegField }
        DBCKENDC { 10 1 RRRegField WWRegField }
        SDIOITC { 22 1 RRRegField WWRegField }
    }

    /// Mask register.
    MASK {
        0x3C 0x20 0x0000_0000 RReg WReg;
        CCRCFAILIE { 0 1 RRRegField WWRegField }
        DCRCFAILIE { 1 1 RRRegField WWRegField }
        CTIMEOUTIE { 2 1 RRRegField WWRegField }
        DTIMEOUTIE { 3 1 RRRegField WWRegField }
        TXUNDERRIE { 4 1 RRRegField WWRegField }
        RXOVERRIE { 5 1 RRRegField WWRegField }
        CMDRENDIE { 6 1 RRRegField WWRegField }
        CMDSENTIE { 7 1 RRRegField WWRegField }
        DATAENDIE { 8 1 RRRegField WWRegField }
        DBCKENDIE { 10 1 RRRegField WWRegField }
        CMDACTIE { 11 1 RRRegField WWRegField }
        TXACTIE { 12 1 RRRegField WWRegField }
        RXACTIE { 13 1 RRRegField WWRegField }
        TXFIFOHEIE { 14 1 RRRegField WWRegField }
        RXFIFOHFIE { 15 1 RRRegField WWRegField }
        TXFIFOFIE { 16 1 RRRegField WWRegField }
        RXFIFOFIE { 17 1 RRRegField WWRegField }
        TXFIFOEIE { 18 1 RRRegField WWRegField }
        RXFIFOEIE { 19 1 RRRegField WWRegField }
        TXDAVLIE { 20 1 RRRegField WWRegField }
        RXDAVLIE { 21 1 RRRegField WWRegField }
        SDIOITIE { 22 1 RRRegField WWRegField }
    }

    /// FIFO counter register.
    FIFOCNT {
        0x48 0x20 0x0000_0000 RReg RoReg;
        FIFOCOUNT { 0 24 RRRegField RoRRegField }
    }

    /// Data FIFO register.
    FIFO {
        0x80 0x20 0x0000_0000 RReg WReg;
        FIFODATA { 0 32 RRRegField WWRegField }
    }
}
