//! Domain names in host syntax.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::label::Labels;
use super::scan::{parse_domain_name, DomainNameStatus, PUNYCODE_PREFIX};
#[cfg(feature = "bytes")]
use bytes::Bytes;
use core::str::FromStr;
use core::{cmp, fmt, hash, str};
use octseq::builder::{EmptyBuilder, FromBuilder, OctetsBuilder};
use octseq::octets::OctetsFrom;
#[cfg(feature = "serde")]
use octseq::serde::{DeserializeOctets, SerializeOctets};

//------------ DomainName ----------------------------------------------------

/// A domain name in the syntax used for hosts.
///
/// The type wraps an octets sequence that contains a domain name as it
/// appears in a URI: labels of letters, digits, and hyphens separated by
/// dots, without a trailing dot. Unlike the wire format of the DNS, the
/// octets are just the text of the name.
///
/// Values are normally created from a string via the [`FromStr`] trait or
/// from an octets sequence via [`from_octets`][Self::from_octets]. Both
/// check the name via [`parse_domain_name`]. A
/// [`HostAuthority`][crate::base::HostAuthority] keeps a
/// `DomainName<&[u8]>` that borrows from the string it was created from.
/// Use [`OctetsFrom`] to turn it into one that owns its octets.
///
/// Domain names are case-insensitive. Comparing, ordering, and hashing
/// values ignores ASCII case accordingly.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct DomainName<Octs: ?Sized>(Octs);

impl DomainName<()> {
    /// Domain names have a maximum length of 255 octets.
    pub const MAX_LEN: usize = super::scan::MAX_NAME_LEN;
}

/// # Creating Values
///
impl<Octs> DomainName<Octs> {
    /// Creates a domain name from the underlying octets without any check.
    ///
    /// # Safety
    ///
    /// The octets sequence passed in `octets` must be a domain name that
    /// [`parse_domain_name`] accepts or empty. In particular, it must only
    /// contain ASCII characters.
    pub const unsafe fn from_octets_unchecked(octets: Octs) -> Self {
        DomainName(octets)
    }

    /// Creates a domain name from an octet sequence.
    ///
    /// This will only succeed if `octets` contains a valid domain name.
    pub fn from_octets(octets: Octs) -> Result<Self, DomainNameError>
    where
        Octs: AsRef<[u8]>,
    {
        DomainName::check_slice(octets.as_ref())?;
        Ok(unsafe { Self::from_octets_unchecked(octets) })
    }

    /// Converts the domain name into the underlying octets sequence.
    pub fn into_octets(self) -> Octs {
        self.0
    }
}

impl DomainName<[u8]> {
    /// Creates a domain name from an octets slice without checking.
    ///
    /// # Safety
    ///
    /// The same rules as for [`from_octets_unchecked`] apply.
    ///
    /// [`from_octets_unchecked`]: DomainName::from_octets_unchecked
    unsafe fn from_slice_unchecked(slice: &[u8]) -> &Self {
        // SAFETY: DomainName has repr(transparent)
        &*(slice as *const [u8] as *const Self)
    }

    /// Creates a domain name from an octets slice.
    pub fn from_slice(slice: &[u8]) -> Result<&Self, DomainNameError> {
        Self::check_slice(slice)?;
        Ok(unsafe { Self::from_slice_unchecked(slice) })
    }

    fn check_slice(slice: &[u8]) -> Result<(), DomainNameError> {
        match parse_domain_name(slice) {
            (status, _) if status.is_valid() => Ok(()),
            (status, pos) => Err(DomainNameError { status, pos }),
        }
    }
}

#[cfg(feature = "bytes")]
impl DomainName<Bytes> {
    /// Creates a domain name atop a `Bytes` from its string representation.
    pub fn bytes_from_str(s: &str) -> Result<Self, FromStrError> {
        FromStr::from_str(s)
    }
}

/// # Conversions
///
impl<Octs: ?Sized> DomainName<Octs> {
    /// Returns a reference to the underlying octets sequence.
    pub fn as_octets(&self) -> &Octs {
        &self.0
    }

    /// Returns a domain name referencing a slice of the octets.
    pub fn for_slice(&self) -> &DomainName<[u8]>
    where
        Octs: AsRef<[u8]>,
    {
        unsafe { DomainName::from_slice_unchecked(self.0.as_ref()) }
    }

    /// Returns the octets of the domain name.
    pub fn as_slice(&self) -> &[u8]
    where
        Octs: AsRef<[u8]>,
    {
        self.0.as_ref()
    }

    /// Returns the domain name as a string slice.
    pub fn as_str(&self) -> &str
    where
        Octs: AsRef<[u8]>,
    {
        // SAFETY: Checked domain names only contain ASCII.
        unsafe { str::from_utf8_unchecked(self.0.as_ref()) }
    }
}

/// # Properties
///
impl<Octs: AsRef<[u8]> + ?Sized> DomainName<Octs> {
    /// Returns the length of the domain name in octets.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns whether the domain name is empty.
    ///
    /// Only a default value is empty.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns whether the value contains a domain name.
    ///
    /// This is only false for the empty default value.
    pub fn is_valid(&self) -> bool {
        !self.is_empty()
    }

    /// Returns whether any of the labels is punycode encoded.
    ///
    /// Only the `xn--` prefix is looked at. The remainder of the label may
    /// well not be proper punycode.
    pub fn has_punycode(&self) -> bool {
        self.iter()
            .any(|label| label.as_bytes().starts_with(PUNYCODE_PREFIX))
    }

    /// Returns the top-level domain.
    ///
    /// This is the part after the last dot or the whole name if there is
    /// no dot.
    pub fn tld(&self) -> &str {
        self.iter().next_back().unwrap_or_default()
    }

    /// Returns an iterator over the labels of the domain name.
    pub fn iter(&self) -> Labels<'_> {
        Labels::new(self.as_slice())
    }

    /// Returns the number of labels in the domain name.
    pub fn label_count(&self) -> usize {
        self.iter().count()
    }

    /// Returns whether `self` is a subdomain of or equal to `base`.
    pub fn ends_with<Other>(&self, base: &DomainName<Other>) -> bool
    where
        Other: AsRef<[u8]> + ?Sized,
    {
        let mut iter = self.iter();
        let mut base_iter = base.iter();
        loop {
            match (iter.next_back(), base_iter.next_back()) {
                (_, None) => return true,
                (Some(left), Some(right)) => {
                    if !left.eq_ignore_ascii_case(right) {
                        return false;
                    }
                }
                (None, Some(_)) => return false,
            }
        }
    }
}

//--- AsRef

impl<Octs: AsRef<[u8]> + ?Sized> AsRef<[u8]> for DomainName<Octs> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> AsRef<str> for DomainName<Octs> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

//--- OctetsFrom

impl<Octs, SrcOcts> OctetsFrom<DomainName<SrcOcts>> for DomainName<Octs>
where
    Octs: OctetsFrom<SrcOcts>,
{
    type Error = Octs::Error;

    fn try_octets_from(
        source: DomainName<SrcOcts>,
    ) -> Result<Self, Self::Error> {
        Octs::try_octets_from(source.0)
            .map(|octets| unsafe { Self::from_octets_unchecked(octets) })
    }
}

//--- FromStr

impl<Octs> FromStr for DomainName<Octs>
where
    Octs: FromBuilder,
    <Octs as FromBuilder>::Builder: EmptyBuilder,
{
    type Err = FromStrError;

    /// Parses a string into a domain name.
    ///
    /// Internationalized domain names need to be given in punycode encoded
    /// form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainName::check_slice(s.as_bytes())?;
        let mut builder =
            <Octs as FromBuilder>::Builder::with_capacity(s.len());
        builder
            .append_slice(s.as_bytes())
            .map_err(|_| FromStrError::ShortBuf)?;
        Ok(unsafe {
            Self::from_octets_unchecked(Octs::from_builder(builder))
        })
    }
}

//--- PartialEq and Eq

impl<Octs, Other> PartialEq<DomainName<Other>> for DomainName<Octs>
where
    Octs: AsRef<[u8]> + ?Sized,
    Other: AsRef<[u8]> + ?Sized,
{
    fn eq(&self, other: &DomainName<Other>) -> bool {
        self.as_slice().eq_ignore_ascii_case(other.as_slice())
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> PartialEq<str> for DomainName<Octs> {
    fn eq(&self, other: &str) -> bool {
        self.as_slice().eq_ignore_ascii_case(other.as_bytes())
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> Eq for DomainName<Octs> {}

//--- PartialOrd and Ord

impl<Octs, Other> PartialOrd<DomainName<Other>> for DomainName<Octs>
where
    Octs: AsRef<[u8]> + ?Sized,
    Other: AsRef<[u8]> + ?Sized,
{
    fn partial_cmp(&self, other: &DomainName<Other>) -> Option<cmp::Ordering> {
        Some(
            self.as_slice()
                .iter()
                .map(u8::to_ascii_lowercase)
                .cmp(other.as_slice().iter().map(u8::to_ascii_lowercase)),
        )
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> Ord for DomainName<Octs> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.as_slice()
            .iter()
            .map(u8::to_ascii_lowercase)
            .cmp(other.as_slice().iter().map(u8::to_ascii_lowercase))
    }
}

//--- Hash

impl<Octs: AsRef<[u8]> + ?Sized> hash::Hash for DomainName<Octs> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for ch in self.as_slice() {
            ch.to_ascii_lowercase().hash(state)
        }
    }
}

//--- Display and Debug

impl<Octs: AsRef<[u8]> + ?Sized> fmt::Display for DomainName<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<Octs: AsRef<[u8]> + ?Sized> fmt::Debug for DomainName<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DomainName({})", self.as_str())
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl<Octs> serde::Serialize for DomainName<Octs>
where
    Octs: AsRef<[u8]> + SerializeOctets + ?Sized,
{
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_newtype_struct("DomainName", self.as_str())
        } else {
            serializer.serialize_newtype_struct(
                "DomainName",
                &self.0.as_serialized_octets(),
            )
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, Octs> serde::Deserialize<'de> for DomainName<Octs>
where
    Octs: FromBuilder + DeserializeOctets<'de>,
    <Octs as FromBuilder>::Builder: EmptyBuilder,
{
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use core::marker::PhantomData;

        struct InnerVisitor<'de, T: DeserializeOctets<'de>>(T::Visitor);

        impl<'de, Octs> serde::de::Visitor<'de> for InnerVisitor<'de, Octs>
        where
            Octs: FromBuilder + DeserializeOctets<'de>,
            <Octs as FromBuilder>::Builder: EmptyBuilder,
        {
            type Value = DomainName<Octs>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a domain name")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> Result<Self::Value, E> {
                DomainName::from_str(v).map_err(E::custom)
            }

            fn visit_borrowed_bytes<E: serde::de::Error>(
                self,
                value: &'de [u8],
            ) -> Result<Self::Value, E> {
                self.0.visit_borrowed_bytes(value).and_then(|octets| {
                    DomainName::from_octets(octets).map_err(E::custom)
                })
            }

            #[cfg(feature = "std")]
            fn visit_byte_buf<E: serde::de::Error>(
                self,
                value: std::vec::Vec<u8>,
            ) -> Result<Self::Value, E> {
                self.0.visit_byte_buf(value).and_then(|octets| {
                    DomainName::from_octets(octets).map_err(E::custom)
                })
            }
        }

        struct NewtypeVisitor<T>(PhantomData<T>);

        impl<'de, Octs> serde::de::Visitor<'de> for NewtypeVisitor<Octs>
        where
            Octs: FromBuilder + DeserializeOctets<'de>,
            <Octs as FromBuilder>::Builder: EmptyBuilder,
        {
            type Value = DomainName<Octs>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a domain name")
            }

            fn visit_newtype_struct<D: serde::Deserializer<'de>>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error> {
                if deserializer.is_human_readable() {
                    deserializer
                        .deserialize_str(InnerVisitor(Octs::visitor()))
                } else {
                    Octs::deserialize_with_visitor(
                        deserializer,
                        InnerVisitor(Octs::visitor()),
                    )
                }
            }
        }

        deserializer.deserialize_newtype_struct(
            "DomainName",
            NewtypeVisitor(PhantomData),
        )
    }
}

//------------ DomainNameError -----------------------------------------------

/// A domain name was rejected by [`parse_domain_name`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DomainNameError {
    status: DomainNameStatus,
    pos: usize,
}

impl DomainNameError {
    /// Returns the status describing the problem.
    pub fn status(self) -> DomainNameStatus {
        self.status
    }

    /// Returns the position where the problem was found.
    pub fn pos(self) -> usize {
        self.pos
    }
}

impl fmt::Display for DomainNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at position {}", self.status, self.pos)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainNameError {}

//------------ FromStrError --------------------------------------------------

/// An error happened while creating a domain name from a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FromStrError {
    /// The string isn’t a valid domain name.
    Name(DomainNameError),

    /// The octets sequence ran out of space.
    ShortBuf,
}

impl From<DomainNameError> for FromStrError {
    fn from(err: DomainNameError) -> Self {
        FromStrError::Name(err)
    }
}

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FromStrError::Name(ref err) => err.fmt(f),
            FromStrError::ShortBuf => {
                f.write_str("the backing buffer was too short")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromStrError {}

//============ Testing =======================================================
