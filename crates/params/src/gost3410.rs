//! Standard GOST R 34.10 parameter sets.
//!
//! Sources: RFC 4357 (the 2001 CryptoPro sets and the test set from the
//! standard's appendix), RFC 7836 (the TC26 2012 sets). The 2012 256-bit
//! sets B, C and D reuse the CryptoPro curves and are exported under both
//! names. Every set below has been cross-checked against the official
//! signature examples; the consistency tests live in `gostec-algorithms`.

use crate::{GostCurve, TwistedEdwards};
use crypto_bigint::U512;

/// id-GostR3410-2001-TestParamSet — the example curve from the appendix of
/// GOST R 34.10-2001.
pub static GOST_R3410_2001_TEST: GostCurve = GostCurve::new(
    U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000008000000000000000000000000000000000000000000000000000000000000431"),
    U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000007"),
    U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000005FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E"),
    U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000002"),
    U512::from_be_hex("000000000000000000000000000000000000000000000000000000000000000008E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8"),
    U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000008000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3"),
    1,
    32,
    None,
);

/// id-GostR3410-2001-CryptoPro-A-ParamSet.
pub static GOST_R3410_2001_CRYPTOPRO_A: GostCurve = cryptopro_a();

/// id-GostR3410-2001-CryptoPro-B-ParamSet.
pub static GOST_R3410_2001_CRYPTOPRO_B: GostCurve = cryptopro_b();

/// id-GostR3410-2001-CryptoPro-C-ParamSet.
pub static GOST_R3410_2001_CRYPTOPRO_C: GostCurve = cryptopro_c();

/// id-tc26-gost-3410-2012-256-paramSetA — the only 256-bit set with a
/// twisted-Edwards form.
pub static GOST_R3410_2012_256_A: GostCurve = GostCurve::new(
    U512::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97"),
    U512::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000C2173F1513981673AF4892C23035A27CE25E2013BF95AA33B22C656F277E7335"),
    U512::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000295F9BAE7428ED9CCC20E7C359A9D41A22FCCD9108E17BF7BA9337A6F8AE9513"),
    U512::from_be_hex("000000000000000000000000000000000000000000000000000000000000000091E38443A5E82C0D880923425712B2BB658B9196932E02C78B2582FE742DAA28"),
    U512::from_be_hex("000000000000000000000000000000000000000000000000000000000000000032879423AB1A0375895786C4BB46E9565FDE0B5344766740AF268ADB32322E5C"),
    U512::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000400000000000000000000000000000000FD8CDDFC87B6635C115AF556C360C67"),
    4,
    32,
    Some(TwistedEdwards {
        e: U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001"),
        d: U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000605F6B7C183FA81578BC39CFAD518132B9DF62897009AF7E522C32D6DC7BFFB"),
    }),
);

/// id-tc26-gost-3410-2012-256-paramSetB (the CryptoPro A curve).
pub static GOST_R3410_2012_256_B: GostCurve = cryptopro_a();

/// id-tc26-gost-3410-2012-256-paramSetC (the CryptoPro B curve).
pub static GOST_R3410_2012_256_C: GostCurve = cryptopro_b();

/// id-tc26-gost-3410-2012-256-paramSetD (the CryptoPro C curve).
pub static GOST_R3410_2012_256_D: GostCurve = cryptopro_c();

/// id-tc26-gost-3410-12-512-paramSetTest — the example curve from the
/// appendix of GOST R 34.10-2012.
pub static GOST_R3410_2012_512_TEST: GostCurve = GostCurve::new(
    U512::from_be_hex("4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15DF1D852741AF4704A0458047E80E4546D35B8336FAC224DD81664BBF528BE6373"),
    U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000007"),
    U512::from_be_hex("1CFF0806A31116DA29D8CFA54E57EB748BC5F377E49400FDD788B649ECA1AC4361834013B2AD7322480A89CA58E0CF74BC9E540C2ADD6897FAD0A3084F302ADC"),
    U512::from_be_hex("24D19CC64572EE30F396BF6EBBFD7A6C5213B3B3D7057CC825F91093A68CD762FD60611262CD838DC6B60AA7EEE804E28BC849977FAC33B4B530F1B120248A9A"),
    U512::from_be_hex("2BB312A43BD2CE6E0D020613C857ACDDCFBF061E91E5F2C3F32447C259F39B2C83AB156D77F1496BF7EB3351E1EE4E43DC1A18B91B24640B6DBB92CB1ADD371E"),
    U512::from_be_hex("4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15DA82F2D7ECB1DBAC719905C5EECC423F1D86E25EDBE23C595D644AAF187E6E6DF"),
    1,
    64,
    None,
);

/// id-tc26-gost-3410-12-512-paramSetA.
pub static GOST_R3410_2012_512_A: GostCurve = GostCurve::new(
    U512::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7"),
    U512::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC4"),
    U512::from_be_hex("E8C2505DEDFC86DDC1BD0B2B6667F1DA34B82574761CB0E879BD081CFD0B6265EE3CB090F30D27614CB4574010DA90DD862EF9D4EBEE4761503190785A71C760"),
    U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000003"),
    U512::from_be_hex("7503CFE87A836AE3A61B8816E25450E6CE5E1C93ACF1ABC1778064FDCBEFA921DF1626BE4FD036E93D75E6A50E3A41E98028FE5FC235F5B889A589CB5215F2A4"),
    U512::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF27E69532F48D89116FF22B8D4E0560609B4B38ABFAD2B85DCACDB1411F10B275"),
    1,
    64,
    None,
);

/// id-tc26-gost-3410-12-512-paramSetB.
pub static GOST_R3410_2012_512_B: GostCurve = GostCurve::new(
    U512::from_be_hex("8000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000006F"),
    U512::from_be_hex("8000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000006C"),
    U512::from_be_hex("687D1B459DC841457E3E06CF6F5E2517B97C7D614AF138BCBF85DC806C4B289F3E965D2DB1416D217F8B276FAD1AB69C50F78BEE1FA3106EFB8CCBC7C5140116"),
    U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000002"),
    U512::from_be_hex("1A8F7EDA389B094C2C071E3647A8940F3C123B697578C213BE6DD9E6C8EC7335DCB228FD1EDF4A39152CBCAAF8C0398828041055F94CEEEC7E21340780FE41BD"),
    U512::from_be_hex("800000000000000000000000000000000000000000000000000000000000000149A1EC142565A545ACFDB77BD9D40CFA8B996712101BEA0EC6346C54374F25BD"),
    1,
    64,
    None,
);

/// id-tc26-gost-3410-2012-512-paramSetC — the 512-bit set with a
/// twisted-Edwards form.
pub static GOST_R3410_2012_512_C: GostCurve = GostCurve::new(
    U512::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7"),
    U512::from_be_hex("DC9203E514A721875485A529D2C722FB187BC8980EB866644DE41C68E143064546E861C0E2C9EDD92ADE71F46FCF50FF2AD97F951FDA9F2A2EB6546F39689BD3"),
    U512::from_be_hex("B4C4EE28CEBC6C2C8AC12952CF37F16AC7EFB6A9F69F4B57FFDA2E4F0DE5ADE038CBC2FFF719D2C18DE0284B8BFEF3B52B8CC7A5F5BF0A3C8D2319A5312557E1"),
    U512::from_be_hex("E2E31EDFC23DE7BDEBE241CE593EF5DE2295B7A9CBAEF021D385F7074CEA043AA27272A7AE602BF2A7B9033DB9ED3610C6FB85487EAE97AAC5BC7928C1950148"),
    U512::from_be_hex("F5CE40D95B5EB899ABBCCFF5911CB8577939804D6527378B8C108C3D2090FF9BE18E2D33E3021ED2EF32D85822423B6304F726AA854BAE07D0396E9A9ADDC40F"),
    U512::from_be_hex("3FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC98CDBA46506AB004C33A9FF5147502CC8EDA9E7A769A12694623CEF47F023ED"),
    4,
    64,
    Some(TwistedEdwards {
        e: U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001"),
        d: U512::from_be_hex("9E4F5D8C017D8D9F13A5CF3CDF5BFE4DAB402D54198E31EBDE28A0621050439CA6B39E0A515C06B304E2CE43E79E369E91A0CFC2BC2A22B4CA302DBB33EE7550"),
    }),
);

const fn cryptopro_a() -> GostCurve {
    GostCurve::new(
        U512::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97"),
        U512::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD94"),
        U512::from_be_hex("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000A6"),
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001"),
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000008D91E471E0989CDA27DF505A453F2B7635294F2DDF23E3B122ACC99C9E9F1E14"),
        U512::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF6C611070995AD10045841B09B761B893"),
        1,
        32,
        None,
    )
}

const fn cryptopro_b() -> GostCurve {
    GostCurve::new(
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000008000000000000000000000000000000000000000000000000000000000000C99"),
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000008000000000000000000000000000000000000000000000000000000000000C96"),
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000003E1AF419A269A5F866A7D3C25C3DF80AE979259373FF2B182F49D4CE7E1BBC8B"),
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001"),
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000003FA8124359F96680B83D1C3EB2C070E5C545C9858D03ECFB744BF8D717717EFC"),
        U512::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000800000000000000000000000000000015F700CFFF1A624E5E497161BCC8A198F"),
        1,
        32,
        None,
    )
}

const fn cryptopro_c() -> GostCurve {
    GostCurve::new(
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000009B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D759B"),
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000009B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D7598"),
        U512::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000805A"),
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"),
        U512::from_be_hex("000000000000000000000000000000000000000000000000000000000000000041ECE55743711A8C3CBF3783CD08C0EE4D4DC440D4641A8F366E550DFDB3BB67"),
        U512::from_be_hex("00000000000000000000000000000000000000000000000000000000000000009B9F605F5A858107AB1EC85E6B41C8AA582CA3511EDDFB74F02F3A6598980BB9"),
        1,
        32,
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_widths() {
        for curve in [
            &GOST_R3410_2001_TEST,
            &GOST_R3410_2001_CRYPTOPRO_A,
            &GOST_R3410_2001_CRYPTOPRO_B,
            &GOST_R3410_2001_CRYPTOPRO_C,
            &GOST_R3410_2012_256_A,
        ] {
            assert_eq!(curve.field_bytes, 32);
            assert_eq!(curve.point_bytes(), 65);
            assert_eq!(curve.signature_bytes(), 64);
        }
        for curve in [
            &GOST_R3410_2012_512_TEST,
            &GOST_R3410_2012_512_A,
            &GOST_R3410_2012_512_B,
            &GOST_R3410_2012_512_C,
        ] {
            assert_eq!(curve.field_bytes, 64);
            assert_eq!(curve.point_bytes(), 129);
            assert_eq!(curve.signature_bytes(), 128);
        }
    }

    #[test]
    fn edwards_forms() {
        assert!(GOST_R3410_2012_256_A.edwards.is_some());
        assert!(GOST_R3410_2012_512_C.edwards.is_some());
        assert!(GOST_R3410_2001_TEST.edwards.is_none());
        assert!(GOST_R3410_2012_512_A.edwards.is_none());
    }

    #[test]
    fn aliased_2012_sets_match_cryptopro() {
        assert_eq!(GOST_R3410_2012_256_B.p, GOST_R3410_2001_CRYPTOPRO_A.p);
        assert_eq!(GOST_R3410_2012_256_B.n, GOST_R3410_2001_CRYPTOPRO_A.n);
        assert_eq!(GOST_R3410_2012_256_C.b, GOST_R3410_2001_CRYPTOPRO_B.b);
        assert_eq!(GOST_R3410_2012_256_D.gy, GOST_R3410_2001_CRYPTOPRO_C.gy);
    }
}
