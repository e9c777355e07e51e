//! USB on-the-go full-speed controller.
//!
//! Core global, host mode, and device mode registers share one layout. The
//! receive status registers have separate host and device views.

crate::periph! {
    /// USB on-the-go full-speed controller.
    pub struct OtgFsPeriph;

    OTG_FS 0x5000_0000;

    /// Control and status register.
    GOTGCTL {
        0x00 0x20 0x0000_0800 RReg WReg;
        /// Session request success.
        SRQSCS { 0 1 RRRegField RoRRegField }
        /// Session request.
        SRQ { 1 1 RRRegField WWRegField }
        VBVALOEN { 2 1 RRRegField WWRegField }
        VBVALOVAL { 3 1 RRRegField WWRegField }
        AVALOEN { 4 1 RRRegField WWRegField }
        AVALOVAL { 5 1 RRRegField WWRegField }
        BVALOEN { 6 1 RRRegField WWRegField }
        BVALOVAL { 7 1 RRRegField WWRegField }
        /// Host negotiation success.
        HNGSCS { 8 1 RRRegField RoRRegField }
        /// HNP request.
        HNPRQ { 9 1 RRRegField WWRegField }
        /// Host set HNP enable.
        HSHNPEN { 10 1 RRRegField WWRegField }
        /// Device HNP enabled.
        DHNPEN { 11 1 RRRegField WWRegField }
        /// Embedded host enable.
        EHEN { 12 1 RRRegField WWRegField }
        /// Connector ID status.
        CIDSTS { 16 1 RRRegField RoRRegField }
        DBCT { 17 1 RRRegField RoRRegField }
        ASVLD { 18 1 RRRegField RoRRegField }
        BSVLD { 19 1 RRRegField RoRRegField }
        /// OTG version.
        OTGVER { 20 1 RRRegField WWRegField }
    }

    /// Interrupt register.
    GOTGINT {
        0x04 0x20 0x0000_0000 RReg WReg;
        SEDET { 2 1 RRRegField WWRegField }
        SRSSCHG { 8 1 RRRegField WWRegField }
        HNSSCHG { 9 1 RRRegField WWRegField }
        HNGDET { 17 1 RRRegField WWRegField }
        ADTOCHG { 18 1 RRRegField WWRegField }
        DBCDNE { 19 1 RRRegField WWRegField }
        IDCHNG { 20 1 RRRegField WWRegField }
    }

    /// AHB configuration register.
    GAHBCFG {
        0x08 0x20 0x0000_0000 RReg WReg;
        /// Global interrupt mask.
        GINTMSK { 0 1 RRRegField WWRegField }
        /// TxFIFO empty level.
        TXFELVL { 7 1 RRRegField WWRegField }
        /// Periodic TxFIFO empty level.
        PTXFELVL { 8 1 RRRegField WWRegField }
    }

    /// USB configuration register.
    GUSBCFG {
        0x0C 0x20 0x0000_1440 RReg WReg;
        /// FS timeout calibration.
        TOCAL { 0 3 RRRegField WWRegField }
        /// Full speed serial transceiver select.
        PHYSEL { 6 1 WWRegField WoWRegField }
        /// SRP-capable.
        SRPCAP { 8 1 RRRegField WWRegField }
        /// HNP-capable.
        HNPCAP { 9 1 RRRegField WWRegField }
        /// USB turnaround time.
        TRDT { 10 4 RRRegField WWRegField }
        /// Force host mode.
        FHMOD { 29 1 RRRegField WWRegField }
        /// Force device mode.
        FDMOD { 30 1 RRRegField WWRegField }
    }

    /// Reset register.
    GRSTCTL {
        0x10 0x20 0x2000_0000 RReg WReg;
        /// Core soft reset.
        CSRST { 0 1 RRRegField WWRegField }
        /// HCLK soft reset.
        HSRST { 1 1 RRRegField WWRegField }
        /// Host frame counter reset.
        FCRST { 2 1 RRRegField WWRegField }
        /// RxFIFO flush.
        RXFFLSH { 4 1 RRRegField WWRegField }
        /// TxFIFO flush.
        TXFFLSH { 5 1 RRRegField WWRegField }
        /// TxFIFO number.
        TXFNUM { 6 5 RRRegField WWRegField }
        /// AHB master idle.
        AHBIDL { 31 1 RRRegField RoRRegField }
    }

    /// Core interrupt register.
    GINTSTS {
        0x14 0x20 0x0400_0020 RReg WReg;
        /// Current mode of operation.
        CMOD { 0 1 RRRegField RoRRegField }
        MMIS { 1 1 RRRegField WWRegField }
        OTGINT { 2 1 RRRegField RoRRegField }
        SOF { 3 1 RRRegField WWRegField }
        RXFLVL { 4 1 RRRegField RoRRegField }
        NPTXFE { 5 1 RRRegField RoRRegField }
        GINAKEFF { 6 1 RRRegField RoRRegField }
        GOUTNAKEFF { 7 1 RRRegField RoRRegField }
        ESUSP { 10 1 RRRegField WWRegField }
        USBSUSP { 11 1 RRRegField WWRegField }
        USBRST { 12 1 RRRegField WWRegField }
        ENUMDNE { 13 1 RRRegField WWRegField }
        ISOODRP { 14 1 RRRegField WWRegField }
        EOPF { 15 1 RRRegField WWRegField }
        IEPINT { 18 1 RRRegField RoRRegField }
        OEPINT { 19 1 RRRegField RoRRegField }
        IISOIXFR { 20 1 RRRegField WWRegField }
        IPXFR_INCOMPISOOUT { 21 1 RRRegField WWRegField }
        RSTDET { 23 1 RRRegField WWRegField }
        HPRTINT { 24 1 RRRegField RoRRegField }
        HCINT { 25 1 RRRegField RoRRegField }
        PTXFE { 26 1 RRRegField RoRRegField }
        LPMINT { 27 1 RRRegField WWRegField }
        CIDSCHG { 28 1 RRRegField WWRegField }
        DISCINT { 29 1 RRRegField WWRegField }
        SRQINT { 30 1 RRRegField WWRegField }
        WKUPINT { 31 1 RRRegField WWRegField }
    }

    /// Interrupt mask register.
    GINTMSK {
        0x18 0x20 0x0000_0000 RReg WReg;
        MMISM { 1 1 RRRegField WWRegField }
        OTGINTM { 2 1 RRRegField WWRegField }
        SOFM { 3 1 RRRegField WWRegField }
        RXFLVLM { 4 1 RRRegField WWRegField }
        NPTXFEM { 5 1 RRRegField WWRegField }
        GINAKEFFM { 6 1 RRRegField WWRegField }
        GOUTNAKEFFM { 7 1 RRRegField WWRegField }
        ESUSPM { 10 1 RRRegField WWRegField }
        USBSUSPM { 11 1 RRRegField WWRegField }
        USBRSTM { 12 1 RRRegField WWRegField }
        ENUMDNEM { 13 1 RRRegField WWRegField }
        ISOODRPM { 14 1 RRRegField WWRegField }
        EOPFM { 15 1 RRRegField WWRegField }
        IEPINTM { 18 1 RRRegField WWRegField }
        OEPINTM { 19 1 RRRegField WWRegField }
        IISOIXFRM { 20 1 RRRegField WWRegField }
        IPXFRM_IISOOXFRM { 21 1 RRRegField WWRegField }
        RSTDETM { 23 1 RRRegField WWRegField }
        HPRTINTM { 24 1 RRRegField WWRegField }
        HCINTM { 25 1 RRRegField WWRegField }
        PTXFEM { 26 1 RRRegField WWRegField }
        LPMINTM { 27 1 RRRegField WWRegField }
        CIDSCHGM { 28 1 RRRegField WWRegField }
        DISCINTM { 29 1 RRRegField WWRegField }
        SRQINTM { 30 1 RRRegField WWRegField }
        WKUPINTM { 31 1 RRRegField WWRegField }
    }

    /// Receive read register, device mode.
    GRXSTSR_Device {
        0x1C 0x20 0x0000_0000 RReg RoReg;
        /// Endpoint number.
        EPNUM { 0 4 RRRegField RoRRegField }
        /// Byte count.
        BCNT { 4 11 RRRegField RoRRegField }
        /// Data PID.
        DPID { 15 2 RRRegField RoRRegField }
        /// Packet status.
        PKTSTS { 17 4 RRRegField RoRRegField }
        /// Frame number.
        FRMNUM { 21 4 RRRegField RoRRegField }
    }

    /// Receive read register, host mode.
    GRXSTSR_Host @GRXSTSR_Device {
        0x1C 0x20 0x0000_0000 RReg RoReg;
        /// Channel number.
        CHNUM { 0 4 RRRegField RoRRegField }
        /// Byte count.
        BCNT { 4 11 RRRegField RoRRegField }
        /// Data PID.
        DPID { 15 2 RRRegField RoRRegField }
        /// Packet status.
        PKTSTS { 17 4 RRRegField RoRRegField }
    }

    /// Receive status read and pop register, device mode.
    GRXSTSP_Device {
        0x20 0x20 0x0000_0000 RReg RoReg;
        /// Endpoint number.
        EPNUM { 0 4 RRRegField RoRRegField }
        /// Byte count.
        BCNT { 4 11 RRRegField RoRRegField }
        /// Data PID.
        DPID { 15 2 RRRegField RoRRegField }
        /// Packet status.
        PKTSTS { 17 4 RRRegField RoRRegField }
        /// Frame number.
        FRMNUM { 21 4 RRRegField RoRRegField }
    }

    /// Receive status read and pop register, host mode.
    GRXSTSP_Host @GRXSTSP_Device {
        0x20 0x20 0x0000_0000 RReg RoReg;
        /// Channel number.
        CHNUM { 0 4 RRRegField RoRRegField }
        /// Byte count.
        BCNT { 4 11 RRRegField RoRRegField }
        /// Data PID.
        DPID { 15 2 RRRegField RoRRegField }
        /// Packet status.
        PKTSTS { 17 4 RRRegField RoRRegField }
    }

    /// Receive FIFO size register.
    GRXFSIZ {
        0x24 0x20 0x0000_0200 RReg WReg;
        /// RxFIFO depth.
        RXFD { 0 16 RRRegField WWRegField }
    }

    /// Host non-periodic transmit FIFO size register.
    HNPTXFSIZ {
        0x28 0x20 0x0000_0200 RReg WReg;
        /// Non-periodic transmit RAM start address.
        NPTXFSA { 0 16 RRRegField WWRegField }
        /// Non-periodic TxFIFO depth.
        NPTXFD { 16 16 RRRegField WWRegField }
    }

    /// Endpoint 0 transmit FIFO size register, device mode.
    DIEPTXF0 @HNPTXFSIZ {
        0x28 0x20 0x0000_0200 RReg WReg;
        /// Endpoint 0 transmit RAM start address.
        TX0FSA { 0 16 RRRegField WWRegField }
        /// Endpoint 0 TxFIFO depth.
        TX0FD { 16 16 RRRegField WWRegField }
    }

    /// Non-periodic transmit FIFO/queue status register.
    HNPTXSTS {
        0x2C 0x20 0x0008_0200 RReg RoReg;
        /// Non-periodic TxFIFO space available.
        NPTXFSAV { 0 16 RRRegField RoRRegField }
        NPTQXSAV { 16 8 RRRegField RoRRegField }
        /// Top of the non-periodic transmit request queue.
        NPTXQTOP { 24 7 RRRegField RoRRegField }
    }

    /// General core configuration register.
    GCCFG {
        0x38 0x20 0x0000_0000 RReg WReg;
        DCDET { 0 1 RRRegField RoRRegField }
        PDET { 1 1 RRRegField RoRRegField }
        SDET { 2 1 RRRegField RoRRegField }
        PS2DET { 3 1 RRRegField RoRRegField }
        /// Power down.
        PWRDWN { 16 1 RRRegField WWRegField }
        /// Battery charging detector enable.
        BCDEN { 17 1 RRRegField WWRegField }
        DCDEN { 18 1 RRRegField WWRegField }
        PDEN { 19 1 RRRegField WWRegField }
        SDEN { 20 1 RRRegField WWRegField }
        /// USB VBUS detection enable.
        VBDEN { 21 1 RRRegField WWRegField }
    }

    /// Core ID register.
    CID {
        0x3C 0x20 0x0000_2000 RReg WReg;
        /// Product ID field.
        PRODUCT_ID { 0 32 RRRegField WWRegField }
    }

    /// Core LPM configuration register.
    GLPMCFG {
        0x54 0x20 0x0000_0000 RReg WReg;
        /// LPM support enable.
        LPMEN { 0 1 RRRegField WWRegField }
        LPMACK { 1 1 RRRegField WWRegField }
        BESL { 2 4 RRRegField RoRRegField }
        REMWAKE { 6 1 RRRegField RoRRegField }
        L1SSEN { 7 1 RRRegField WWRegField }
        BESLTHRS { 8 4 RRRegField WWRegField }
        L1DSEN { 12 1 RRRegField WWRegField }
        LPMRST { 13 2 RRRegField RoRRegField }
        SLPSTS { 15 1 RRRegField RoRRegField }
        L1RSMOK { 16 1 RRRegField RoRRegField }
        LPMCHIDX { 17 4 RRRegField WWRegField }
        LPMRCNT { 21 3 RRRegField WWRegField }
        SNDLPM { 24 1 RRRegField WWRegField }
        LPMRCNTSTS { 25 3 RRRegField RoRRegField }
        ENBESL { 28 1 RRRegField WWRegField }
    }

    /// Host periodic transmit FIFO size register.
    HPTXFSIZ {
        0x100 0x20 0x0200_0600 RReg WReg;
        /// Host periodic TxFIFO start address.
        PTXSA { 0 16 RRRegField WWRegField }
        /// Host periodic TxFIFO depth.
        PTXFSIZ { 16 16 RRRegField WWRegField }
    }

    /// Device IN endpoint 1 transmit FIFO size register.
    DIEPTXF1 {
        0x104 0x20 0x0200_0400 RReg WReg;
        /// IN endpoint FIFO transmit RAM start address.
        INEPTXSA { 0 16 RRRegField WWRegField }
        /// IN endpoint TxFIFO depth.
        INEPTXFD { 16 16 RRRegField WWRegField }
    }

    /// Device IN endpoint 2 transmit FIFO size register.
    DIEPTXF2 {
        0x108 0x20 0x0200_0400 RReg WReg;
        /// IN endpoint FIFO transmit RAM start address.
        INEPTXSA { 0 16 RRRegField WWRegField }
        /// IN endpoint TxFIFO depth.
        INEPTXFD { 16 16 RRRegField WWRegField }
    }

    /// Device IN endpoint 3 transmit FIFO size register.
    DIEPTXF3 {
        0x10C 0x20 0x0200_0400 RReg WReg;
        /// IN endpoint FIFO transmit RAM start address.
        INEPTXSA { 0 16 RRRegField WWRegField }
        /// IN endpoint TxFIFO depth.
        INEPTXFD { 16 16 RRRegField WWRegField }
    }

    /// Device IN endpoint 4 transmit FIFO size register.
    DIEPTXF4 {
        0x110 0x20 0x0200_0400 RReg WReg;
        /// IN endpoint FIFO transmit RAM start address.
        INEPTXSA { 0 16 RRRegField WWRegField }
        /// IN endpoint TxFIFO depth.
        INEPTXFD { 16 16 RRRegField WWRegField }
    }

    /// Device IN endpoint 5 transmit FIFO size register.
    DIEPTXF5 {
        0x114 0x20 0x0200_0400 RReg WReg;
        /// IN endpoint FIFO transmit RAM start address.
        INEPTXSA { 0 16 RRRegField WWRegField }
        /// IN endpoint TxFIFO depth.
        INEPTXFD { 16 16 RRRegField WWRegField }
    }

    /// Host configuration register.
    HCFG {
        0x400 0x20 0x0000_0000 RReg WReg;
        /// FS/LS PHY clock select.
        FSLSPCS { 0 2 RRRegField WWRegField }
        /// FS- and LS-only support.
        FSLSS { 2 1 RRRegField RoRRegField }
    }

    /// Host frame interval register.
    HFIR {
        0x404 0x20 0x0000_EA60 RReg WReg;
        /// Frame interval.
        FRIVL { 0 16 RRRegField WWRegField }
    }

    /// Host frame number/frame time remaining register.
    HFNUM {
        0x408 0x20 0x0000_3FFF RReg RoReg;
        /// Frame number.
        FRNUM { 0 16 RRRegField RoRRegField }
        /// Frame time remaining.
        FTREM { 16 16 RRRegField RoRRegField }
    }

    /// Host periodic transmit FIFO/queue status register.
    HPTXSTS {
        0x410 0x20 0x0008_0100 RReg WReg;
        /// Periodic transmit data FIFO space available.
        PTXFSAVL { 0 16 RRRegField WWRegField }
        PTXQSAV { 16 8 RRRegField RoRRegField }
        /// Top of the periodic transmit request queue.
        PTXQTOP { 24 8 RRRegField RoRRegField }
    }

    /// Host all channels interrupt register.
    HAINT {
        0x414 0x20 0x0000_0000 RReg RoReg;
        /// Channel interrupts.
        HAINT { 0 16 RRRegField RoRRegField }
    }

    /// Host all channels interrupt mask register.
    HAINTMSK {
        0x418 0x20 0x0000_0000 RReg WReg;
        /// Channel interrupt mask.
        HAINTM { 0 16 RRRegField WWRegField }
    }

    /// Host port control and status register.
    HPRT {
        0x440 0x20 0x0000_0000 RReg WReg;
        /// Port connect status.
        PCSTS { 0 1 RRRegField RoRRegField }
        /// Port connect detected.
        PCDET { 1 1 RRRegField WWRegField }
        /// Port enable.
        PENA { 2 1 RRRegField WWRegField }
        /// Port enable/disable change.
        PENCHNG { 3 1 RRRegField WWRegField }
        /// Port overcurrent active.
        POCA { 4 1 RRRegField RoRRegField }
        POCCHNG { 5 1 RRRegField WWRegField }
        /// Port resume.
        PRES { 6 1 RRRegField WWRegField }
        /// Port suspend.
        PSUSP { 7 1 RRRegField WWRegField }
        /// Port reset.
        PRST { 8 1 RRRegField WWRegField }
        /// Port line status.
        PLSTS { 10 2 RRRegField RoRRegField }
        /// Port power.
        PPWR { 12 1 RRRegField WWRegField }
        /// Port test control.
        PTCTL { 13 4 RRRegField WWRegField }
        /// Port speed.
        PSPD { 17 2 RRRegField RoRRegField }
    }

    /// Host channel 0 characteristics register.
    HCCHAR0 {
        0x500 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 0 interrupt register.
    HCINT0 {
        0x508 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 0 interrupt mask register.
    HCINTMSK0 {
        0x50C 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 0 transfer size register.
    HCTSIZ0 {
        0x510 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 1 characteristics register.
    HCCHAR1 {
        0x520 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 1 interrupt register.
    HCINT1 {
        0x528 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 1 interrupt mask register.
    HCINTMSK1 {
        0x52C 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 1 transfer size register.
    HCTSIZ1 {
        0x530 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 2 characteristics register.
    HCCHAR2 {
        0x540 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 2 interrupt register.
    HCINT2 {
        0x548 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 2 interrupt mask register.
    HCINTMSK2 {
        0x54C 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 2 transfer size register.
    HCTSIZ2 {
        0x550 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 3 characteristics register.
    HCCHAR3 {
        0x560 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 3 interrupt register.
    HCINT3 {
        0x568 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 3 interrupt mask register.
    HCINTMSK3 {
        0x56C 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 3 transfer size register.
    HCTSIZ3 {
        0x570 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 4 characteristics register.
    HCCHAR4 {
        0x580 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 4 interrupt register.
    HCINT4 {
        0x588 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 4 interrupt mask register.
    HCINTMSK4 {
        0x58C 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 4 transfer size register.
    HCTSIZ4 {
        0x590 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 5 characteristics register.
    HCCHAR5 {
        0x5A0 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 5 interrupt register.
    HCINT5 {
        0x5A8 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 5 interrupt mask register.
    HCINTMSK5 {
        0x5AC 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 5 transfer size register.
    HCTSIZ5 {
        0x5B0 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 6 characteristics register.
    HCCHAR6 {
        0x5C0 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 6 interrupt register.
    HCINT6 {
        0x5C8 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 6 interrupt mask register.
    HCINTMSK6 {
        0x5CC 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 6 transfer size register.
    HCTSIZ6 {
        0x5D0 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 7 characteristics register.
    HCCHAR7 {
        0x5E0 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 7 interrupt register.
    HCINT7 {
        0x5E8 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 7 interrupt mask register.
    HCINTMSK7 {
        0x5EC 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 7 transfer size register.
    HCTSIZ7 {
        0x5F0 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 8 characteristics register.
    HCCHAR8 {
        0x600 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 8 interrupt register.
    HCINT8 {
        0x608 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 8 interrupt mask register.
    HCINTMSK8 {
        0x60C 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 8 transfer size register.
    HCTSIZ8 {
        0x610 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 9 characteristics register.
    HCCHAR9 {
        0x620 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 9 interrupt register.
    HCINT9 {
        0x628 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 9 interrupt mask register.
    HCINTMSK9 {
        0x62C 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 9 transfer size register.
    HCTSIZ9 {
        0x630 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 10 characteristics register.
    HCCHAR10 {
        0x640 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 10 interrupt register.
    HCINT10 {
        0x648 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 10 interrupt mask register.
    HCINTMSK10 {
        0x64C 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 10 transfer size register.
    HCTSIZ10 {
        0x650 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Host channel 11 characteristics register.
    HCCHAR11 {
        0x660 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        /// Endpoint number.
        EPNUM { 11 4 RRRegField WWRegField }
        /// Endpoint direction.
        EPDIR { 15 1 RRRegField WWRegField }
        /// Low-speed device.
        LSDEV { 17 1 RRRegField WWRegField }
        /// Endpoint type.
        EPTYP { 18 2 RRRegField WWRegField }
        /// Multicount.
        MCNT { 20 2 RRRegField WWRegField }
        /// Device address.
        DAD { 22 7 RRRegField WWRegField }
        /// Odd frame.
        ODDFRM { 29 1 RRRegField WWRegField }
        /// Channel disable.
        CHDIS { 30 1 RRRegField WWRegField }
        /// Channel enable.
        CHENA { 31 1 RRRegField WWRegField }
    }

    /// Host channel 11 interrupt register.
    HCINT11 {
        0x668 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        CHH { 1 1 RRRegField WWRegField }
        STALL { 3 1 RRRegField WWRegField }
        NAK { 4 1 RRRegField WWRegField }
        ACK { 5 1 RRRegField WWRegField }
        TXERR { 7 1 RRRegField WWRegField }
        BBERR { 8 1 RRRegField WWRegField }
        FRMOR { 9 1 RRRegField WWRegField }
        DTERR { 10 1 RRRegField WWRegField }
    }

    /// Host channel 11 interrupt mask register.
    HCINTMSK11 {
        0x66C 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        CHHM { 1 1 RRRegField WWRegField }
        STALLM { 3 1 RRRegField WWRegField }
        NAKM { 4 1 RRRegField WWRegField }
        ACKM { 5 1 RRRegField WWRegField }
        NYET { 6 1 RRRegField WWRegField }
        TXERRM { 7 1 RRRegField WWRegField }
        BBERRM { 8 1 RRRegField WWRegField }
        FRMORM { 9 1 RRRegField WWRegField }
        DTERRM { 10 1 RRRegField WWRegField }
    }

    /// Host channel 11 transfer size register.
    HCTSIZ11 {
        0x670 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Data PID.
        DPID { 29 2 RRRegField WWRegField }
    }

    /// Device configuration register.
    DCFG {
        0x800 0x20 0x0220_0000 RReg WReg;
        /// Device speed.
        DSPD { 0 2 RRRegField WWRegField }
        /// Non-zero-length status OUT handshake.
        NZLSOHSK { 2 1 RRRegField WWRegField }
        /// Device address.
        DAD { 4 7 RRRegField WWRegField }
        /// Periodic frame interval.
        PFIVL { 11 2 RRRegField WWRegField }
    }

    /// Device control register.
    DCTL {
        0x804 0x20 0x0000_0000 RReg WReg;
        /// Remote wakeup signaling.
        RWUSIG { 0 1 RRRegField WWRegField }
        /// Soft disconnect.
        SDIS { 1 1 RRRegField WWRegField }
        /// Global IN NAK status.
        GINSTS { 2 1 RRRegField RoRRegField }
        /// Global OUT NAK status.
        GONSTS { 3 1 RRRegField RoRRegField }
        /// Test control.
        TCTL { 4 3 RRRegField WWRegField }
        SGINAK { 7 1 RRRegField WWRegField }
        CGINAK { 8 1 RRRegField WWRegField }
        SGONAK { 9 1 RRRegField WWRegField }
        CGONAK { 10 1 RRRegField WWRegField }
        /// Power-on programming done.
        POPRGDNE { 11 1 RRRegField WWRegField }
    }

    /// Device status register.
    DSTS {
        0x808 0x20 0x0000_0010 RReg RoReg;
        /// Suspend status.
        SUSPSTS { 0 1 RRRegField RoRRegField }
        /// Enumerated speed.
        ENUMSPD { 1 2 RRRegField RoRRegField }
        /// Erratic error.
        EERR { 3 1 RRRegField RoRRegField }
        /// Frame number of the received SOF.
        FNSOF { 8 14 RRRegField RoRRegField }
    }

    /// Device IN endpoint common interrupt mask register.
    DIEPMSK {
        0x810 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        EPDM { 1 1 RRRegField WWRegField }
        TOM { 3 1 RRRegField WWRegField }
        ITTXFEMSK { 4 1 RRRegField WWRegField }
        INEPNMM { 5 1 RRRegField WWRegField }
        INEPNEM { 6 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint common interrupt mask register.
    DOEPMSK {
        0x814 0x20 0x0000_0000 RReg WReg;
        XFRCM { 0 1 RRRegField WWRegField }
        EPDM { 1 1 RRRegField WWRegField }
        STUPM { 3 1 RRRegField WWRegField }
        OTEPDM { 4 1 RRRegField WWRegField }
    }

    /// Device all endpoints interrupt register.
    DAINT {
        0x818 0x20 0x0000_0000 RReg RoReg;
        /// IN endpoint interrupt bits.
        IEPINT { 0 16 RRRegField RoRRegField }
        /// OUT endpoint interrupt bits.
        OEPINT { 16 16 RRRegField RoRRegField }
    }

    /// All endpoints interrupt mask register.
    DAINTMSK {
        0x81C 0x20 0x0000_0000 RReg WReg;
        /// IN endpoint interrupt mask bits.
        IEPM { 0 16 RRRegField WWRegField }
        /// OUT endpoint interrupt mask bits.
        OEPM { 16 16 RRRegField WWRegField }
    }

    /// Device VBUS discharge time register.
    DVBUSDIS {
        0x828 0x20 0x0000_17D7 RReg WReg;
        /// Device VBUS discharge time.
        VBUSDT { 0 16 RRRegField WWRegField }
    }

    /// Device VBUS pulsing time register.
    DVBUSPULSE {
        0x82C 0x20 0x0000_05B8 RReg WReg;
        /// Device VBUS pulsing time.
        DVBUSP { 0 12 RRRegField WWRegField }
    }

    /// Device IN endpoint FIFO empty interrupt mask register.
    DIEPEMPMSK {
        0x834 0x20 0x0000_0000 RReg WReg;
        /// IN endpoint TxFIFO empty interrupt mask bits.
        INEPTXFEM { 0 16 RRRegField WWRegField }
    }

    /// Device IN endpoint 0 control register.
    DIEPCTL0 {
        0x900 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 2 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField RoRRegField }
        STALL { 21 1 RRRegField WWRegField }
        /// TxFIFO number.
        TXFNUM { 22 4 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        /// Endpoint disable.
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device IN endpoint 0 interrupt register.
    DIEPINT0 {
        0x908 0x20 0x0000_0080 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        TOC { 3 1 RRRegField WWRegField }
        ITTXFE { 4 1 RRRegField WWRegField }
        INEPNE { 6 1 RRRegField WWRegField }
        TXFE { 7 1 RRRegField RoRRegField }
    }

    /// Device IN endpoint 0 transfer size register.
    DIEPTSIZ0 {
        0x910 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 7 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 2 RRRegField WWRegField }
    }

    /// Device IN endpoint 0 transmit FIFO status register.
    DTXFSTS0 {
        0x918 0x20 0x0000_0200 RReg RoReg;
        /// IN endpoint TxFIFO space available.
        INEPTFSAV { 0 16 RRRegField RoRRegField }
    }

    /// Device IN endpoint 1 control register.
    DIEPCTL1 {
        0x920 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField WWRegField }
        EONUM_DPID { 16 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        /// TxFIFO number.
        TXFNUM { 22 4 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        SD0PID_SEVNFRM { 28 1 RRRegField WWRegField }
        SODDFRM { 29 1 RRRegField WWRegField }
        /// Endpoint disable.
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device IN endpoint 1 interrupt register.
    DIEPINT1 {
        0x928 0x20 0x0000_0080 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        TOC { 3 1 RRRegField WWRegField }
        ITTXFE { 4 1 RRRegField WWRegField }
        INEPNE { 6 1 RRRegField WWRegField }
        TXFE { 7 1 RRRegField RoRRegField }
    }

    /// Device IN endpoint 1 transfer size register.
    DIEPTSIZ1 {
        0x930 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Multi count.
        MCNT { 29 2 RRRegField WWRegField }
    }

    /// Device IN endpoint 1 transmit FIFO status register.
    DTXFSTS1 {
        0x938 0x20 0x0000_0200 RReg RoReg;
        /// IN endpoint TxFIFO space available.
        INEPTFSAV { 0 16 RRRegField RoRRegField }
    }

    /// Device IN endpoint 2 control register.
    DIEPCTL2 {
        0x940 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField WWRegField }
        EONUM_DPID { 16 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        /// TxFIFO number.
        TXFNUM { 22 4 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        SD0PID_SEVNFRM { 28 1 RRRegField WWRegField }
        SODDFRM { 29 1 RRRegField WWRegField }
        /// Endpoint disable.
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device IN endpoint 2 interrupt register.
    DIEPINT2 {
        0x948 0x20 0x0000_0080 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        TOC { 3 1 RRRegField WWRegField }
        ITTXFE { 4 1 RRRegField WWRegField }
        INEPNE { 6 1 RRRegField WWRegField }
        TXFE { 7 1 RRRegField RoRRegField }
    }

    /// Device IN endpoint 2 transfer size register.
    DIEPTSIZ2 {
        0x950 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Multi count.
        MCNT { 29 2 RRRegField WWRegField }
    }

    /// Device IN endpoint 2 transmit FIFO status register.
    DTXFSTS2 {
        0x958 0x20 0x0000_0200 RReg RoReg;
        /// IN endpoint TxFIFO space available.
        INEPTFSAV { 0 16 RRRegField RoRRegField }
    }

    /// Device IN endpoint 3 control register.
    DIEPCTL3 {
        0x960 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField WWRegField }
        EONUM_DPID { 16 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        /// TxFIFO number.
        TXFNUM { 22 4 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        SD0PID_SEVNFRM { 28 1 RRRegField WWRegField }
        SODDFRM { 29 1 RRRegField WWRegField }
        /// Endpoint disable.
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device IN endpoint 3 interrupt register.
    DIEPINT3 {
        0x968 0x20 0x0000_0080 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        TOC { 3 1 RRRegField WWRegField }
        ITTXFE { 4 1 RRRegField WWRegField }
        INEPNE { 6 1 RRRegField WWRegField }
        TXFE { 7 1 RRRegField RoRRegField }
    }

    /// Device IN endpoint 3 transfer size register.
    DIEPTSIZ3 {
        0x970 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Multi count.
        MCNT { 29 2 RRRegField WWRegField }
    }

    /// Device IN endpoint 3 transmit FIFO status register.
    DTXFSTS3 {
        0x978 0x20 0x0000_0200 RReg RoReg;
        /// IN endpoint TxFIFO space available.
        INEPTFSAV { 0 16 RRRegField RoRRegField }
    }

    /// Device IN endpoint 4 control register.
    DIEPCTL4 {
        0x980 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField WWRegField }
        EONUM_DPID { 16 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        /// TxFIFO number.
        TXFNUM { 22 4 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        SD0PID_SEVNFRM { 28 1 RRRegField WWRegField }
        SODDFRM { 29 1 RRRegField WWRegField }
        /// Endpoint disable.
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device IN endpoint 4 interrupt register.
    DIEPINT4 {
        0x988 0x20 0x0000_0080 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        TOC { 3 1 RRRegField WWRegField }
        ITTXFE { 4 1 RRRegField WWRegField }
        INEPNE { 6 1 RRRegField WWRegField }
        TXFE { 7 1 RRRegField RoRRegField }
    }

    /// Device IN endpoint 4 transfer size register.
    DIEPTSIZ4 {
        0x990 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Multi count.
        MCNT { 29 2 RRRegField WWRegField }
    }

    /// Device IN endpoint 4 transmit FIFO status register.
    DTXFSTS4 {
        0x998 0x20 0x0000_0200 RReg RoReg;
        /// IN endpoint TxFIFO space available.
        INEPTFSAV { 0 16 RRRegField RoRRegField }
    }

    /// Device IN endpoint 5 control register.
    DIEPCTL5 {
        0x9A0 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField WWRegField }
        EONUM_DPID { 16 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        /// TxFIFO number.
        TXFNUM { 22 4 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        SD0PID_SEVNFRM { 28 1 RRRegField WWRegField }
        SODDFRM { 29 1 RRRegField WWRegField }
        /// Endpoint disable.
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device IN endpoint 5 interrupt register.
    DIEPINT5 {
        0x9A8 0x20 0x0000_0080 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        TOC { 3 1 RRRegField WWRegField }
        ITTXFE { 4 1 RRRegField WWRegField }
        INEPNE { 6 1 RRRegField WWRegField }
        TXFE { 7 1 RRRegField RoRRegField }
    }

    /// Device IN endpoint 5 transfer size register.
    DIEPTSIZ5 {
        0x9B0 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        /// Multi count.
        MCNT { 29 2 RRRegField WWRegField }
    }

    /// Device IN endpoint 5 transmit FIFO status register.
    DTXFSTS5 {
        0x9B8 0x20 0x0000_0200 RReg RoReg;
        /// IN endpoint TxFIFO space available.
        INEPTFSAV { 0 16 RRRegField RoRRegField }
    }

    /// Device OUT endpoint 0 control register.
    DOEPCTL0 {
        0xB00 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 2 RRRegField RoRRegField }
        USBAEP { 15 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField RoRRegField }
        SNPM { 20 1 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        EPDIS { 30 1 RRRegField RoRRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 0 interrupt register.
    DOEPINT0 {
        0xB08 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        STUP { 3 1 RRRegField WWRegField }
        OTEPDIS { 4 1 RRRegField WWRegField }
        STSPHSRX { 5 1 RRRegField WWRegField }
        B2BSTUP { 6 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 0 transfer size register.
    DOEPTSIZ0 {
        0xB10 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 7 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 1 RRRegField WWRegField }
        /// SETUP packet count.
        STUPCNT { 29 2 RRRegField WWRegField }
    }

    /// Device OUT endpoint 1 control register.
    DOEPCTL1 {
        0xB20 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField WWRegField }
        EONUM_DPID { 16 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField WWRegField }
        SNPM { 20 1 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        SD0PID_SEVNFRM { 28 1 RRRegField WWRegField }
        SODDFRM { 29 1 RRRegField WWRegField }
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 1 interrupt register.
    DOEPINT1 {
        0xB28 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        STUP { 3 1 RRRegField WWRegField }
        OTEPDIS { 4 1 RRRegField WWRegField }
        STSPHSRX { 5 1 RRRegField WWRegField }
        B2BSTUP { 6 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 1 transfer size register.
    DOEPTSIZ1 {
        0xB30 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        RXDPID_STUPCNT { 29 2 RRRegField WWRegField }
    }

    /// Device OUT endpoint 2 control register.
    DOEPCTL2 {
        0xB40 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField WWRegField }
        EONUM_DPID { 16 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField WWRegField }
        SNPM { 20 1 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        SD0PID_SEVNFRM { 28 1 RRRegField WWRegField }
        SODDFRM { 29 1 RRRegField WWRegField }
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 2 interrupt register.
    DOEPINT2 {
        0xB48 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        STUP { 3 1 RRRegField WWRegField }
        OTEPDIS { 4 1 RRRegField WWRegField }
        STSPHSRX { 5 1 RRRegField WWRegField }
        B2BSTUP { 6 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 2 transfer size register.
    DOEPTSIZ2 {
        0xB50 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        RXDPID_STUPCNT { 29 2 RRRegField WWRegField }
    }

    /// Device OUT endpoint 3 control register.
    DOEPCTL3 {
        0xB60 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField WWRegField }
        EONUM_DPID { 16 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField WWRegField }
        SNPM { 20 1 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        SD0PID_SEVNFRM { 28 1 RRRegField WWRegField }
        SODDFRM { 29 1 RRRegField WWRegField }
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 3 interrupt register.
    DOEPINT3 {
        0xB68 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        STUP { 3 1 RRRegField WWRegField }
        OTEPDIS { 4 1 RRRegField WWRegField }
        STSPHSRX { 5 1 RRRegField WWRegField }
        B2BSTUP { 6 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 3 transfer size register.
    DOEPTSIZ3 {
        0xB70 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        RXDPID_STUPCNT { 29 2 RRRegField WWRegField }
    }

    /// Device OUT endpoint 4 control register.
    DOEPCTL4 {
        0xB80 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField WWRegField }
        EONUM_DPID { 16 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField WWRegField }
        SNPM { 20 1 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        SD0PID_SEVNFRM { 28 1 RRRegField WWRegField }
        SODDFRM { 29 1 RRRegField WWRegField }
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 4 interrupt register.
    DOEPINT4 {
        0xB88 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        STUP { 3 1 RRRegField WWRegField }
        OTEPDIS { 4 1 RRRegField WWRegField }
        STSPHSRX { 5 1 RRRegField WWRegField }
        B2BSTUP { 6 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 4 transfer size register.
    DOEPTSIZ4 {
        0xB90 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        RXDPID_STUPCNT { 29 2 RRRegField WWRegField }
    }

    /// Device OUT endpoint 5 control register.
    DOEPCTL5 {
        0xBA0 0x20 0x0000_0000 RReg WReg;
        /// Maximum packet size.
        MPSIZ { 0 11 RRRegField WWRegField }
        USBAEP { 15 1 RRRegField WWRegField }
        EONUM_DPID { 16 1 RRRegField RoRRegField }
        NAKSTS { 17 1 RRRegField RoRRegField }
        EPTYP { 18 2 RRRegField WWRegField }
        SNPM { 20 1 RRRegField WWRegField }
        STALL { 21 1 RRRegField WWRegField }
        CNAK { 26 1 RRRegField WWRegField }
        SNAK { 27 1 RRRegField WWRegField }
        SD0PID_SEVNFRM { 28 1 RRRegField WWRegField }
        SODDFRM { 29 1 RRRegField WWRegField }
        EPDIS { 30 1 RRRegField WWRegField }
        /// Endpoint enable.
        EPENA { 31 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 5 interrupt register.
    DOEPINT5 {
        0xBA8 0x20 0x0000_0000 RReg WReg;
        XFRC { 0 1 RRRegField WWRegField }
        EPDISD { 1 1 RRRegField WWRegField }
        STUP { 3 1 RRRegField WWRegField }
        OTEPDIS { 4 1 RRRegField WWRegField }
        STSPHSRX { 5 1 RRRegField WWRegField }
        B2BSTUP { 6 1 RRRegField WWRegField }
    }

    /// Device OUT endpoint 5 transfer size register.
    DOEPTSIZ5 {
        0xBB0 0x20 0x0000_0000 RReg WReg;
        /// Transfer size.
        XFRSIZ { 0 19 RRRegField WWRegField }
        /// Packet count.
        PKTCNT { 19 10 RRRegField WWRegField }
        RXDPID_STUPCNT { 29 2 RRRegField WWRegField }
    }

    /// Power and clock gating control register.
    PCGCCTL {
        0xE00 0x20 0x0000_0000 RReg WReg;
        /// Stop PHY clock.
        STPPCLK { 0 1 RRRegField WWRegField }
        /// Gate HCLK.
        GATEHCLK { 1 1 RRRegField WWRegField }
        /// PHY suspended.
        PHYSUSP { 4 1 RRRegField RoRRegField }
    }
}
