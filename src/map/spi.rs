//! Serial peripheral interfaces.
//!
//! Registers are accessed as 16-bit half-words.

crate::periph! {
    /// Serial peripheral interface.
    pub struct SpiPeriph;

    SPI1 0x4001_3000;
    SPI2 0x4000_3800;
    SPI3 0x4000_3C00;

    /// Control register 1.
    CR1 {
        0x00 0x10 0x0000 RReg WReg;
        /// Clock phase.
        CPHA { 0 1 RRRegField WWRegField }
        /// Clock polarity.
        CPOL { 1 1 RRRegField WWRegField }
        /// Master selection.
        MSTR { 2 1 RRRegField WWRegField }
        /// Baud rate control.
        BR { 3 3 RRRegField WWRegField }
        /// SPI enable.
        SPE { 6 1 RRRegField WWRegField }
        /// Frame format.
        LSBFIRST { 7 1 RRRegField WWRegField }
        /// Internal slave select.
        SSI { 8 1 RRRegField WWRegField }
        /// Software slave management.
        SSM { 9 1 RRRegField WWRegField }
        RXONLY { 10 1 RRRegField WWRegField }
        /// CRC length.
        CRCL { 11 1 RRRegField WWRegField }
        CRCNEXT { 12 1 RRRegField WWRegField }
        CRCEN { 13 1 RRRegField WWRegField }
        BIDIOE { 14 1 RRRegField WWRegField }
        BIDIMODE { 15 1 RRRegField WWRegField }
    }

    /// Control register 2.
    CR2 {
        0x04 0x10 0x0700 RReg WReg;
        RXDMAEN { 0 1 RRRegField WWRegField }
        TXDMAEN { 1 1 RRRegField WWRegField }
        /// SS output enable.
        SSOE { 2 1 RRRegField WWRegField }
        /// NSS pulse management.
        NSSP { 3 1 RRRegField WWRegField }
        /// Frame format.
        FRF { 4 1 RRRegField WWRegField }
        ERRIE { 5 1 RRRegField WWRegField }
        RXNEIE { 6 1 RRRegField WWRegField }
        TXEIE { 7 1 RRRegField WWRegField }
        /// Data size.
        DS { 8 4 RRRegField WWRegField }
        /// FIFO reception threshold.
        FRXTH { 12 1 RRRegField WWRegField }
        LDMA_RX { 13 1 RRRegField WWRegField }
        LDMA_TX { 14 1 RRRegField WWRegField }
    }

    /// Status register.
    SR {
        0x08 0x10 0x0002 RReg WReg;
        /// Receive buffer not empty.
        RXNE { 0 1 RRRegField RoRRegField }
        /// Transmit buffer empty.
        TXE { 1 1 RRRegField RoRRegField }
        /// CRC error flag.
        CRCERR { 4 1 RRRegField WWRegField }
        /// Mode fault.
        MODF { 5 1 RRRegField RoRRegField }
        /// Overrun flag.
        OVR { 6 1 RRRegField RoRRegField }
        /// Busy flag.
        BSY { 7 1 RRRegField RoRRegField }
        /// Frame format error.
        FRE { 8 1 RRRegField RoRRegField }
        /// FIFO reception level.
        FRLVL { 9 2 RRRegField RoRRegField }
        /// FIFO transmission level.
        FTLVL { 11 2 RRRegField RoRRegField }
    }

    /// Data register.
    DR {
        0x0C 0x10 0x0000 RReg WReg;
        /// Data register.
        DR { 0 16 RRRegField WWRegField }
    }

    /// CRC polynomial register.
    CRCPR {
        0x10 0x10 0x0007 RReg WReg;
        CRCPOLY { 0 16 RRRegField WWRegField }
    }

    /// Rx CRC register.
    RXCRCR {
        0x14 0x10 0x0000 RReg RoReg;
        RXCRC { 0 16 RRRegField RoRRegField }
    }

    /// Tx CRC register.
    TXCRCR {
        0x18 0x10 0x0000 RReg RoReg;
        TXCRC { 0 16 RRRegField RoRRegField }
    }
}
