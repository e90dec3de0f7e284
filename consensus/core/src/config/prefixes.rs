/// Categories of version bytes prepended to encoded keys and addresses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefixKind {
    PublicKeyAddress,
    ScriptAddress,
    SecretKey,
    ExtendedPublicKey,
    ExtendedSecretKey,
    Bip44CoinType,
}

impl PrefixKind {
    pub const ALL: [PrefixKind; 6] = [
        PrefixKind::PublicKeyAddress,
        PrefixKind::ScriptAddress,
        PrefixKind::SecretKey,
        PrefixKind::ExtendedPublicKey,
        PrefixKind::ExtendedSecretKey,
        PrefixKind::Bip44CoinType,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressPrefixes {
    pub public_key_address: &'static [u8],
    pub script_address: &'static [u8],
    pub secret_key: &'static [u8],
    pub extended_public_key: &'static [u8],
    pub extended_secret_key: &'static [u8],
    pub bip44_coin_type: &'static [u8],
}

impl AddressPrefixes {
    pub const fn get(&self, kind: PrefixKind) -> &'static [u8] {
        match kind {
            PrefixKind::PublicKeyAddress => self.public_key_address,
            PrefixKind::ScriptAddress => self.script_address,
            PrefixKind::SecretKey => self.secret_key,
            PrefixKind::ExtendedPublicKey => self.extended_public_key,
            PrefixKind::ExtendedSecretKey => self.extended_secret_key,
            PrefixKind::Bip44CoinType => self.bip44_coin_type,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrefixKind, &'static [u8])> + '_ {
        PrefixKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

pub const MAINNET_PREFIXES: AddressPrefixes = AddressPrefixes {
    public_key_address: &[63],
    script_address: &[18],
    secret_key: &[191],
    extended_public_key: &[0x04, 0x88, 0xB2, 0x1E],
    extended_secret_key: &[0x04, 0x88, 0xAD, 0xE4],
    bip44_coin_type: &[0x80, 0x00, 0x00, 0xde],
};

pub const TESTNET_PREFIXES: AddressPrefixes = AddressPrefixes {
    public_key_address: &[65],
    script_address: &[11],
    secret_key: &[188],
    extended_public_key: &[0x04, 0x35, 0x87, 0xCF],
    extended_secret_key: &[0x04, 0x35, 0x83, 0x94],
    bip44_coin_type: &[0x80, 0x00, 0x00, 0x01],
};
