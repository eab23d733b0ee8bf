//! @acp:module "Address Parsing"
//! @acp:summary "Split an affiliation address into index record fields"
//! @acp:domain cli
//! @acp:layer service
//!
//! Addresses are free text with comma-separated components, read from
//! the end: country, then `STATE POSTCODE`, then city. The first
//! component is always the institution; anything between it and the
//! city is ignored.

/// @acp:summary "Structured form of one affiliation address"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalAddress {
    pub institution: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl PostalAddress {
    pub fn parse(address: &str) -> Self {
        let parts: Vec<&str> = address.split(',').map(str::trim).collect();
        let mut parsed = Self {
            institution: parts.first().copied().unwrap_or_default().to_string(),
            ..Self::default()
        };

        // Components after the institution, last one first
        let mut rest = parts.iter().skip(1).rev();

        if let Some(country) = rest.next() {
            parsed.country = country.to_string();
        }

        if let Some(state_code) = rest.next() {
            let tokens: Vec<&str> = state_code.split_whitespace().collect();
            parsed.state = tokens.first().copied().unwrap_or_default().to_string();
            if tokens.len() == 2 {
                parsed.postal_code = tokens[1].to_string();
            }
        }

        if let Some(city) = rest.next() {
            parsed.city = city.to_string();
        }

        parsed
    }
}

/// @acp:summary "One `\paperauthor` index record"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperAuthor {
    /// Normalized `Initials~Surname`
    pub name: String,
    pub email: String,
    pub orcid: String,
    pub address: PostalAddress,
}

impl PaperAuthor {
    /// `\paperauthor{name}{email}{orcid}{institution}{}{city}{state}{postcode}{country}`
    ///
    /// The empty fifth argument is the department, which the database
    /// does not carry.
    pub fn to_latex(&self) -> String {
        let a = &self.address;
        format!(
            r"\paperauthor{{{}}}{{{}}}{{{}}}{{{}}}{{}}{{{}}}{{{}}}{{{}}}{{{}}}",
            self.name,
            self.email,
            self.orcid,
            a.institution,
            a.city,
            a.state,
            a.postal_code,
            a.country
        )
    }
}
