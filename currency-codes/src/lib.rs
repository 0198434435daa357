//! ISO 4217 Currency Codes with Macro-Based Generation
//!
//! Every currency a conversion may name is declared once in the
//! `define_currencies!` invocation below. The macro expands the table into the
//! [`CurrencyCode`] enum together with its lookup, parsing and display impls.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` macro invocation, keeping the table
//! in alphabetical order:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     XYZ => ("XYZ", "New Currency"),
//! }
//! ```
//!
//! # Example
//! ```
//! use currency_codes::CurrencyCode;
//!
//! let usd: CurrencyCode = "usd".parse().unwrap();
//! assert_eq!(usd, CurrencyCode::USD);
//! assert_eq!(usd.to_string(), "USD");
//! assert_eq!(usd.name(), "US Dollar");
//! ```

/// Error returned when a string is not a known ISO 4217 code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its runtime lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define currencies with auto-generated enum, lookups and parsing.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     Variant => ("CODE", "Display name"),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $label:literal)
        ),* $(,)?
    ) => {
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $label),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = $crate::UnknownCurrency;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err($crate::UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    AED => ("AED", "UAE Dirham"),
    AFN => ("AFN", "Afghani"),
    ALL => ("ALL", "Lek"),
    AMD => ("AMD", "Armenian Dram"),
    ANG => ("ANG", "Netherlands Antillean Guilder"),
    AOA => ("AOA", "Kwanza"),
    ARS => ("ARS", "Argentine Peso"),
    AUD => ("AUD", "Australian Dollar"),
    AWG => ("AWG", "Aruban Florin"),
    AZN => ("AZN", "Azerbaijan Manat"),
    BAM => ("BAM", "Convertible Mark"),
    BBD => ("BBD", "Barbados Dollar"),
    BDT => ("BDT", "Taka"),
    BGN => ("BGN", "Bulgarian Lev"),
    BHD => ("BHD", "Bahraini Dinar"),
    BIF => ("BIF", "Burundi Franc"),
    BMD => ("BMD", "Bermudian Dollar"),
    BND => ("BND", "Brunei Dollar"),
    BOB => ("BOB", "Boliviano"),
    BRL => ("BRL", "Brazilian Real"),
    BSD => ("BSD", "Bahamian Dollar"),
    BTN => ("BTN", "Ngultrum"),
    BWP => ("BWP", "Pula"),
    BYN => ("BYN", "Belarusian Ruble"),
    BZD => ("BZD", "Belize Dollar"),
    CAD => ("CAD", "Canadian Dollar"),
    CDF => ("CDF", "Congolese Franc"),
    CHF => ("CHF", "Swiss Franc"),
    CLP => ("CLP", "Chilean Peso"),
    CNY => ("CNY", "Yuan Renminbi"),
    COP => ("COP", "Colombian Peso"),
    CRC => ("CRC", "Costa Rican Colon"),
    CUP => ("CUP", "Cuban Peso"),
    CVE => ("CVE", "Cabo Verde Escudo"),
    CZK => ("CZK", "Czech Koruna"),
    DJF => ("DJF", "Djibouti Franc"),
    DKK => ("DKK", "Danish Krone"),
    DOP => ("DOP", "Dominican Peso"),
    DZD => ("DZD", "Algerian Dinar"),
    EGP => ("EGP", "Egyptian Pound"),
    ERN => ("ERN", "Nakfa"),
    ETB => ("ETB", "Ethiopian Birr"),
    EUR => ("EUR", "Euro"),
    FJD => ("FJD", "Fiji Dollar"),
    FKP => ("FKP", "Falkland Islands Pound"),
    GBP => ("GBP", "Pound Sterling"),
    GEL => ("GEL", "Lari"),
    GHS => ("GHS", "Ghana Cedi"),
    GIP => ("GIP", "Gibraltar Pound"),
    GMD => ("GMD", "Dalasi"),
    GNF => ("GNF", "Guinean Franc"),
    GTQ => ("GTQ", "Quetzal"),
    GYD => ("GYD", "Guyana Dollar"),
    HKD => ("HKD", "Hong Kong Dollar"),
    HNL => ("HNL", "Lempira"),
    HTG => ("HTG", "Gourde"),
    HUF => ("HUF", "Forint"),
    IDR => ("IDR", "Rupiah"),
    ILS => ("ILS", "New Israeli Sheqel"),
    INR => ("INR", "Indian Rupee"),
    IQD => ("IQD", "Iraqi Dinar"),
    IRR => ("IRR", "Iranian Rial"),
    ISK => ("ISK", "Iceland Krona"),
    JMD => ("JMD", "Jamaican Dollar"),
    JOD => ("JOD", "Jordanian Dinar"),
    JPY => ("JPY", "Yen"),
    KES => ("KES", "Kenyan Shilling"),
    KGS => ("KGS", "Som"),
    KHR => ("KHR", "Riel"),
    KMF => ("KMF", "Comorian Franc"),
    KPW => ("KPW", "North Korean Won"),
    KRW => ("KRW", "Won"),
    KWD => ("KWD", "Kuwaiti Dinar"),
    KYD => ("KYD", "Cayman Islands Dollar"),
    KZT => ("KZT", "Tenge"),
    LAK => ("LAK", "Lao Kip"),
    LBP => ("LBP", "Lebanese Pound"),
    LKR => ("LKR", "Sri Lanka Rupee"),
    LRD => ("LRD", "Liberian Dollar"),
    LSL => ("LSL", "Loti"),
    LYD => ("LYD", "Libyan Dinar"),
    MAD => ("MAD", "Moroccan Dirham"),
    MDL => ("MDL", "Moldovan Leu"),
    MGA => ("MGA", "Malagasy Ariary"),
    MKD => ("MKD", "Denar"),
    MMK => ("MMK", "Kyat"),
    MNT => ("MNT", "Tugrik"),
    MOP => ("MOP", "Pataca"),
    MRU => ("MRU", "Ouguiya"),
    MUR => ("MUR", "Mauritius Rupee"),
    MVR => ("MVR", "Rufiyaa"),
    MWK => ("MWK", "Malawi Kwacha"),
    MXN => ("MXN", "Mexican Peso"),
    MYR => ("MYR", "Malaysian Ringgit"),
    MZN => ("MZN", "Mozambique Metical"),
    NAD => ("NAD", "Namibia Dollar"),
    NGN => ("NGN", "Naira"),
    NIO => ("NIO", "Cordoba Oro"),
    NOK => ("NOK", "Norwegian Krone"),
    NPR => ("NPR", "Nepalese Rupee"),
    NZD => ("NZD", "New Zealand Dollar"),
    OMR => ("OMR", "Rial Omani"),
    PAB => ("PAB", "Balboa"),
    PEN => ("PEN", "Sol"),
    PGK => ("PGK", "Kina"),
    PHP => ("PHP", "Philippine Peso"),
    PKR => ("PKR", "Pakistan Rupee"),
    PLN => ("PLN", "Zloty"),
    PYG => ("PYG", "Guarani"),
    QAR => ("QAR", "Qatari Rial"),
    RON => ("RON", "Romanian Leu"),
    RSD => ("RSD", "Serbian Dinar"),
    RUB => ("RUB", "Russian Ruble"),
    RWF => ("RWF", "Rwanda Franc"),
    SAR => ("SAR", "Saudi Riyal"),
    SBD => ("SBD", "Solomon Islands Dollar"),
    SCR => ("SCR", "Seychelles Rupee"),
    SDG => ("SDG", "Sudanese Pound"),
    SEK => ("SEK", "Swedish Krona"),
    SGD => ("SGD", "Singapore Dollar"),
    SHP => ("SHP", "Saint Helena Pound"),
    SLE => ("SLE", "Leone"),
    SOS => ("SOS", "Somali Shilling"),
    SRD => ("SRD", "Surinam Dollar"),
    SSP => ("SSP", "South Sudanese Pound"),
    STN => ("STN", "Dobra"),
    SVC => ("SVC", "El Salvador Colon"),
    SYP => ("SYP", "Syrian Pound"),
    SZL => ("SZL", "Lilangeni"),
    THB => ("THB", "Baht"),
    TJS => ("TJS", "Somoni"),
    TMT => ("TMT", "Turkmenistan New Manat"),
    TND => ("TND", "Tunisian Dinar"),
    TOP => ("TOP", "Pa'anga"),
    TRY => ("TRY", "Turkish Lira"),
    TTD => ("TTD", "Trinidad and Tobago Dollar"),
    TWD => ("TWD", "New Taiwan Dollar"),
    TZS => ("TZS", "Tanzanian Shilling"),
    UAH => ("UAH", "Hryvnia"),
    UGX => ("UGX", "Uganda Shilling"),
    USD => ("USD", "US Dollar"),
    UYU => ("UYU", "Peso Uruguayo"),
    UZS => ("UZS", "Uzbekistan Sum"),
    VES => ("VES", "Bolivar Soberano"),
    VND => ("VND", "Dong"),
    VUV => ("VUV", "Vatu"),
    WST => ("WST", "Tala"),
    XAF => ("XAF", "CFA Franc BEAC"),
    XAG => ("XAG", "Silver"),
    XAU => ("XAU", "Gold"),
    XCD => ("XCD", "East Caribbean Dollar"),
    XDR => ("XDR", "SDR (Special Drawing Right)"),
    XOF => ("XOF", "CFA Franc BCEAO"),
    XPD => ("XPD", "Palladium"),
    XPF => ("XPF", "CFP Franc"),
    XPT => ("XPT", "Platinum"),
    YER => ("YER", "Yemeni Rial"),
    ZAR => ("ZAR", "Rand"),
    ZMW => ("ZMW", "Zambian Kwacha"),
    ZWL => ("ZWL", "Zimbabwe Dollar"),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("USD".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!("eur".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
        assert_eq!(" huf ".parse::<CurrencyCode>().unwrap(), CurrencyCode::HUF);
    }

    #[test]
    fn test_unknown_currency_message() {
        let err = "AAA".parse::<CurrencyCode>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown currency: AAA");
    }

    #[test]
    fn test_unknown_currency_is_a_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> =
            Box::new("XYZ".parse::<CurrencyCode>().unwrap_err());
        assert_eq!(err.to_string(), "Unknown currency: XYZ");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::GBP.to_string(), "GBP");
        assert_eq!(CurrencyCode::GBP.name(), "Pound Sterling");
    }

    #[test]
    fn test_all_codes_are_sorted_and_unique() {
        let codes: Vec<&str> = CurrencyCode::all().iter().map(|c| c.code()).collect();
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
        assert!(codes.iter().all(|c| c.len() == 3));
    }

    #[test]
    fn test_every_code_round_trips_through_from_str() {
        for currency in CurrencyCode::all() {
            assert_eq!(currency.code().parse::<CurrencyCode>().unwrap(), *currency);
        }
    }

    #[test]
    fn test_serde_uses_upper_case_code() {
        let json = serde_json::to_string(&CurrencyCode::JPY).unwrap();
        assert_eq!(json, "\"JPY\"");
    }
}
