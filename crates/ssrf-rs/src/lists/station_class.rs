//! Station class codes (USC), used by StnClass and Usage.

use serde::{Deserialize, Serialize};

code_list! {
    /// Station class (USC).
    ///
    /// Variants are named after their code.
    ListUsc, "ListUSC" {
        AL => "AL",
        ALA => "ALA",
        ALB => "ALB",
        ALC => "ALC",
        ALG => "ALG",
        ALL => "ALL",
        ALO => "ALO",
        ALR => "ALR",
        ALS => "ALS",
        ALTM => "ALTM",
        ALTO => "ALTO",
        AM => "AM",
        AMA => "AMA",
        APX => "APX",
        APX2 => "APX2",
        AT => "AT",
        AX => "AX",
        AX2 => "AX2",
        BC => "BC",
        BT => "BT",
        DAMS => "DAMS",
        DARS => "DARS",
        DBS => "DBS",
        DFSS => "DFSS",
        DGP => "DGP",
        DHFS => "DHFS",
        DLMS => "DLMS",
        DMMS => "DMMS",
        DMSS => "DMSS",
        DTH => "DTH",
        E1 => "E1",
        E2 => "E2",
        E3 => "E3",
        E4 => "E4",
        EA => "EA",
        EB => "EB",
        EC => "EC",
        ED => "ED",
        EE => "EE",
        EESS => "EESS",
        EF => "EF",
        EG => "EG",
        EH => "EH",
        EI => "EI",
        EJ => "EJ",
        EK => "EK",
        ELT => "ELT",
        ELT1 => "ELT1",
        EM => "EM",
        EMER => "EMER",
        EMSS => "EMSS",
        EN => "EN",
        EO => "EO",
        EQ => "EQ",
        ER => "ER",
        ES => "ES",
        ESV => "ESV",
        ET => "ET",
        EU => "EU",
        EV => "EV",
        EW => "EW",
        EX => "EX",
        EY => "EY",
        FA => "FA",
        FA1 => "FA1",
        FA2 => "FA2",
        FAA => "FAA",
        FAA1 => "FAA1",
        FAA2 => "FAA2",
        FAB => "FAB",
        FAC => "FAC",
        FAD => "FAD",
        FAS => "FAS",
        FAS1 => "FAS1",
        FAT => "FAT",
        FAT1 => "FAT1",
        FAT3 => "FAT3",
        FB => "FB",
        FB2 => "FB2",
        FB2A => "FB2A",
        FB2C => "FB2C",
        FB2I => "FB2I",
        FB2J => "FB2J",
        FB2K => "FB2K",
        FB2L => "FB2L",
        FB2S => "FB2S",
        FB2T => "FB2T",
        FB4 => "FB4",
        FB4C => "FB4C",
        FB4I => "FB4I",
        FB4J => "FB4J",
        FB4K => "FB4K",
        FB4S => "FB4S",
        FB4T => "FB4T",
        FB6 => "FB6",
        FB6C => "FB6C",
        FB6I => "FB6I",
        FB6J => "FB6J",
        FB6K => "FB6K",
        FB6L => "FB6L",
        FB6S => "FB6S",
        FB6T => "FB6T",
        FB7 => "FB7",
        FB7C => "FB7C",
        FB7J => "FB7J",
        FB7T => "FB7T",
        FB8 => "FB8",
        FB8A => "FB8A",
        FB8C => "FB8C",
        FB8I => "FB8I",
        FB8J => "FB8J",
        FB8L => "FB8L",
        FB8S => "FB8S",
        FB8T => "FB8T",
        FBA => "FBA",
        FBAT => "FBAT",
        FBBS => "FBBS",
        FBC => "FBC",
        FBCT => "FBCT",
        FBD => "FBD",
        FBGS => "FBGS",
        FBI => "FBI",
        FBJ => "FBJ",
        FBK => "FBK",
        FBL => "FBL",
        FBS => "FBS",
        FBSI => "FBSI",
        FBST => "FBST",
        FBT => "FBT",
        FC => "FC",
        FCA => "FCA",
        FCA2 => "FCA2",
        FCB => "FCB",
        FCD => "FCD",
        FCL => "FCL",
        FCL2 => "FCL2",
        FCU => "FCU",
        FCU1 => "FCU1",
        FD => "FD",
        FDBS => "FDBS",
        FG => "FG",
        FIS => "FIS",
        FL => "FL",
        FLD => "FLD",
        FLE => "FLE",
        FLEA => "FLEA",
        FLEB => "FLEB",
        FLEC => "FLEC",
        FLFS => "FLFS",
        FLH => "FLH",
        FLU => "FLU",
        FLU1 => "FLU1",
        FLW => "FLW",
        FMA1 => "FMA1",
        FP => "FP",
        FR => "FR",
        FSS => "FSS",
        FSSF => "FSSF",
        FX => "FX",
        FX1 => "FX1",
        FX1A => "FX1A",
        FX1C => "FX1C",
        FX1I => "FX1I",
        FX1J => "FX1J",
        FX1K => "FX1K",
        FX1L => "FX1L",
        FX1S => "FX1S",
        FX1T => "FX1T",
        FX2 => "FX2",
        FX2C => "FX2C",
        FX2I => "FX2I",
        FX2J => "FX2J",
        FX2K => "FX2K",
        FX2L => "FX2L",
        FX2S => "FX2S",
        FX2T => "FX2T",
        FX3 => "FX3",
        FX3C => "FX3C",
        FX3J => "FX3J",
        FX3S => "FX3S",
        FX3T => "FX3T",
        FX5 => "FX5",
        FXC => "FXC",
        FXCO => "FXCO",
        FXCT => "FXCT",
        FXD => "FXD",
        FXDI => "FXDI",
        FXE => "FXE",
        FXH => "FXH",
        FXI => "FXI",
        FXIO => "FXIO",
        FXK => "FXK",
        FXO => "FXO",
        FXOC => "FXOC",
        FXOI => "FXOI",
        FXOJ => "FXOJ",
        FXOS => "FXOS",
        FXOT => "FXOT",
        FXRP => "FXRP",
        FXRX => "FXRX",
        FXS => "FXS",
        FXSB => "FXSB",
        FXT => "FXT",
        FXTS => "FXTS",
        GCO => "GCO",
        GS => "GS",
        IAMS => "IAMS",
        IFLM => "IFLM",
        IFSS => "IFSS",
        IMMS => "IMMS",
        IMSS => "IMSS",
        LR => "LR",
        LRT => "LRT",
        MA => "MA",
        MAD => "MAD",
        MAP => "MAP",
        ME => "ME",
        MFL => "MFL",
        MFL1 => "MFL1",
        MFL2 => "MFL2",
        MFX => "MFX",
        ML => "ML",
        MLD => "MLD",
        MLP => "MLP",
        MMS => "MMS",
        MO => "MO",
        MO3 => "MO3",
        MO3C => "MO3C",
        MO3I => "MO3I",
        MO5 => "MO5",
        MO6 => "MO6",
        MO6C => "MO6C",
        MO6I => "MO6I",
        MO6L => "MO6L",
        MO6S => "MO6S",
        MO7 => "MO7",
        MO7C => "MO7C",
        MO7I => "MO7I",
        MO7L => "MO7L",
        MO8 => "MO8",
        MO8A => "MO8A",
        MO8C => "MO8C",
        MOA => "MOA",
        MOB => "MOB",
        MOC => "MOC",
        MOD => "MOD",
        MOE => "MOE",
        MOEA => "MOEA",
        MOEB => "MOEB",
        MOEC => "MOEC",
        MOH => "MOH",
        MOI => "MOI",
        MOL => "MOL",
        MOP => "MOP",
        MOS => "MOS",
        MOT => "MOT",
        MOU => "MOU",
        MOU1 => "MOU1",
        MR => "MR",
        MRP => "MRP",
        MRT => "MRT",
        MRT2 => "MRT2",
        MS => "MS",
        MSC => "MSC",
        MSD => "MSD",
        MSP => "MSP",
        MSR => "MSR",
        MSS => "MSS",
        NL => "NL",
        NLC => "NLC",
        NLM => "NLM",
        NR => "NR",
        OD => "OD",
        OE => "OE",
        OTH => "OTH",
        PA => "PA",
        PL => "PL",
        PLAN => "PLAN",
        RA => "RA",
        RCO => "RCO",
        RDS => "RDS",
        RG => "RG",
        RLA => "RLA",
        RLB => "RLB",
        RLB1 => "RLB1",
        RLB2 => "RLB2",
        RLC => "RLC",
        RLC2 => "RLC2",
        RLD => "RLD",
        RLG => "RLG",
        RLL => "RLL",
        RLO => "RLO",
        RLR => "RLR",
        RLT => "RLT",
        RLT1 => "RLT1",
        RM => "RM",
        RN => "RN",
        RNL => "RNL",
        RNV => "RNV",
        RPC => "RPC",
        SA => "SA",
        SAR => "SAR",
        SAR1 => "SAR1",
        SM => "SM",
        SMB => "SMB",
        SMD => "SMD",
        SMRG => "SMRG",
        SN => "SN",
        SP => "SP",
        SS => "SS",
        TA => "TA",
        TB => "TB",
        TC => "TC",
        TD => "TD",
        TE => "TE",
        TF => "TF",
        TG => "TG",
        TH => "TH",
        TI => "TI",
        TJ => "TJ",
        TK => "TK",
        TL => "TL",
        TM => "TM",
        TN => "TN",
        TO => "TO",
        TP => "TP",
        TQ => "TQ",
        TR => "TR",
        TS => "TS",
        TT => "TT",
        TU => "TU",
        TV => "TV",
        TW => "TW",
        TX => "TX",
        TY => "TY",
        TZ => "TZ",
        UA => "UA",
        UB => "UB",
        UD => "UD",
        UE => "UE",
        UH => "UH",
        UK => "UK",
        UM => "UM",
        UN => "UN",
        UR => "UR",
        UT => "UT",
        UV => "UV",
        UW => "UW",
        UY => "UY",
        VA => "VA",
        WDX => "WDX",
        WDXT => "WDXT",
        X => "X",
        XC => "XC",
        XD => "XD",
        XE => "XE",
        XM => "XM",
        XR => "XR",
        XT => "XT",
    }
}
