//! Records written by Ableton Live, shared by the integration tests of the
//! whole workspace.

#![allow(dead_code)]

/// Reference to `Users/shresthagrawal/Desktop/0001 20-Audio.aif` on `Macintosh HD`.
pub const SAMPLE: &str = concat!(
    "00000000015E000200000C4D6163696E746F7368204844000000000000000000",
    "0000000000000000000042440001FFFFFFFF11303030312032302D417564696F",
    "2E61696600000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000FFFFFFFF00000000414946460000",
    "0000FFFFFFFF00000A20637500000000000000000000000000074465736B746F",
    "7000000200302F3A55736572733A736872657374686167726177616C3A446573",
    "6B746F703A303030312032302D417564696F2E616966000E0024001100300030",
    "00300031002000320030002D0041007500640069006F002E006100690066000F",
    "001A000C004D006100630069006E0074006F007300680020004800440012002E",
    "55736572732F736872657374686167726177616C2F4465736B746F702F303030",
    "312032302D417564696F2E616966001300012F00001500020015FFFF0000",
);

/// The same reference after moving the file into the project folder.
pub const RELOCATED: &str = concat!(
    "0000000001D4000200000C4D6163696E746F7368204844000000000000000000",
    "0000000000000000000042440001FFFFFFFF11303030312032312D417564696F",
    "2E61696600000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000FFFFFFFF00000000414946460000",
    "0000FFFFFFFF00000A206375000000000000000000000000000A4E657720466F",
    "6C646572000200692F3A55736572733A736872657374686167726177616C3A44",
    "65736B746F703A776F726B3A4769744D757369633A73616D706C652D70726F6A",
    "6563743A7265736F757263652050726F6A6563743A4E657720466F6C6465723A",
    "303030312032312D417564696F2E61696600000E002400110030003000300031",
    "002000320031002D0041007500640069006F002E006100690066000F001A000C",
    "004D006100630069006E0074006F007300680020004800440012006755736572",
    "732F736872657374686167726177616C2F4465736B746F702F776F726B2F4769",
    "744D757369632F73616D706C652D70726F6A6563742F7265736F757263652050",
    "726F6A6563742F4E657720466F6C6465722F303030312032312D417564696F2E",
    "61696600001300012F00001500020015FFFF0000",
);

/// Reference to `Drums/kick.wav` on the `Samples` volume mounted at `/Volumes/Samples`.
pub const EXTERNAL: &str = concat!(
    "000000000110000200000C4D6163696E746F7368204844000000000000000000",
    "0000000000000000000042440001FFFFFFFF11303030312032302D417564696F",
    "2E61696600000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000FFFFFFFF00000000414946460000",
    "0000FFFFFFFF00000A20637500000000000000000000000000074465736B746F",
    "7000000200102F3A4472756D733A6B69636B2E776176000E00120008006B0069",
    "0063006B002E007700610076000F0010000700530061006D0070006C00650073",
    "0012000E4472756D732F6B69636B2E776176001300102F566F6C756D65732F53",
    "616D706C6573001500020015FFFF0000",
);

pub const LOCATION: &str = "Users/shresthagrawal/Desktop/0001 20-Audio.aif";
pub const NEW_LOCATION: &str = "Users/shresthagrawal/Desktop/work/GitMusic/sample-project/resource Project/New Folder/0001 21-Audio.aif";
pub const DISK_NAME: &str = "Macintosh HD";
