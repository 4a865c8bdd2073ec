//! Well-known framework identifiers and profiles

/// Canonical framework identifiers
pub mod identifiers {
    pub const NET: &str = ".NETFramework";
    pub const NET_CORE: &str = ".NETCore";
    pub const NET_MICRO: &str = ".NETMicroFramework";
    pub const PORTABLE: &str = "Portable";
    pub const WINDOWS: &str = "Windows";
    pub const WINDOWS_PHONE: &str = "WindowsPhone";
    pub const WINDOWS_PHONE_APP: &str = "WindowsPhoneApp";
    pub const SILVERLIGHT: &str = "Silverlight";
    pub const ASP_NET: &str = "ASP.NET";
    pub const ASP_NET_CORE: &str = "ASP.NETCore";
    pub const NATIVE: &str = "native";
    pub const MONO_ANDROID: &str = "MonoAndroid";
    pub const MONO_TOUCH: &str = "MonoTouch";
    pub const MONO_MAC: &str = "MonoMac";
    pub const XAMARIN_IOS: &str = "Xamarin.iOS";
    pub const XAMARIN_MAC: &str = "Xamarin.Mac";

    // Sentinels
    pub const UNSUPPORTED: &str = "Unsupported";
    pub const ANY: &str = "Any";
    pub const EMPTY: &str = "";
}

/// Canonical profile names
pub mod profiles {
    pub const CLIENT: &str = "Client";
    pub const FULL: &str = "Full";
    pub const COMPACT_FRAMEWORK: &str = "CompactFramework";
    pub const WINDOWS_PHONE: &str = "WindowsPhone";
    pub const WINDOWS_PHONE_71: &str = "WindowsPhone71";
}

/// Prefix of portable profile designators ("Profile7")
pub const PORTABLE_PROFILE_PREFIX: &str = "Profile";

/// Separator between a version token and a profile token in folder names
pub const PROFILE_SEPARATOR: char = '-';

/// Separator between constituent frameworks of a portable profile
pub const PORTABLE_SEPARATOR: char = '+';
