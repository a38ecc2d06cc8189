//! Common GEDCOM fixtures for tests.

/// Smallest valid GEDCOM 7.0 document
pub const MINIMAL_70: &str = "0 HEAD\n1 GEDC\n2 VERS 7.0\n0 TRLR\n";

/// Smallest valid GEDCOM 5.5.1 document
pub const MINIMAL_551: &str = "0 HEAD
1 SOUR MyApp
1 SUBM @U1@
1 GEDC
2 VERS 5.5.1
2 FORM LINEAGE-LINKED
1 CHAR UTF-8
0 @U1@ SUBM
1 NAME Jane /Doe/
0 TRLR
";

/// A family whose wife was never declared
pub const DANGLING_WIFE: &str = "0 HEAD
1 GEDC
2 VERS 7.0
0 @Homer_Simpson@ INDI
1 NAME Homer /Simpson/
1 SEX M
0 @F1@ FAM
1 HUSB @Homer_Simpson@
1 WIFE @Marge_Simpson@
1 MARR Y
0 TRLR
";

/// A fully linked family
pub const LINKED_FAMILY: &str = "0 HEAD
1 GEDC
2 VERS 7.0
0 @I1@ INDI
1 NAME Homer /Simpson/
1 SEX M
1 FAMS @F1@
0 @I2@ INDI
1 NAME Marge /Simpson/
1 SEX F
1 FAMS @F1@
0 @I3@ INDI
1 NAME Bart /Simpson/
1 BIRT
2 DATE 1 APR 1980
1 FAMC @F1@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 CHIL @I3@
1 MARR Y
0 TRLR
";

/// A GEDCOM 7.0 document exercising the standard's individual and family
/// events, attributes, name translations and citations
pub const STANDARD_70: &str = "0 HEAD
1 GEDC
2 VERS 7.0
1 SOUR FamilyTreeApp
2 VERS 3.1
1 DATE 5 MAR 2024
2 TIME 14:30:00
1 LANG en
0 @I1@ INDI
1 NAME John /Doe/
2 GIVN John
2 SURN Doe
2 TRAN Jon /Doe/
3 LANG no
1 SEX M
1 BIRT
2 DATE 12 JAN 1850
2 PLAC Boston, Suffolk, Massachusetts, USA
1 BAPM
2 DATE 20 JAN 1850
1 RESI
2 ADDR 12 Elm Street
3 CITY Boston
2 DATE FROM 1870 TO 1880
1 EDUC College
2 DATE 1872
1 OCCU Blacksmith
1 TITL Sir
1 RELI Quaker
1 NATI American
1 EVEN
2 TYPE Custom
2 DATE 1875
1 FACT Left-handed
2 TYPE Handedness
1 IDNO 123-45
2 TYPE Parish register
1 CENS
2 DATE 1880
1 EMIG
2 DATE 1890
2 PLAC Liverpool, England
1 IMMI
2 DATE 1890
1 NATU
2 DATE 1895
1 DEAT
2 DATE 3 JUN 1920
2 CAUS Influenza
1 BURI
2 PLAC Mount Auburn Cemetery
1 PROB
2 DATE 1921
1 WILL
2 DATE 1919
1 NO DIV
1 FAMS @F1@
1 FAMC @F0@
2 PEDI BIRTH
0 @I2@ INDI
1 NAME Mary /Roe/
1 SEX F
1 ADOP
2 FAMC @F0@
3 ADOP BOTH
1 ASSO @I1@
2 ROLE FRIEND
1 FAMS @F1@
0 @I3@ INDI
1 NAME Thomas /Doe/
1 SEX M
1 CHR
2 DATE 1 MAY 1880
1 FAMC @F1@
0 @F0@ FAM
1 CHIL @I1@
1 CHIL @I2@
0 @F1@ FAM
1 HUSB @I1@
1 WIFE @I2@
1 ENGA
2 DATE 1877
1 MARR
2 DATE 14 FEB 1878
2 HUSB
3 AGE 28y
1 RESI
2 PLAC Boston
1 EVEN
2 TYPE Housewarming
1 NCHI 1
1 CHIL @I3@
1 SOUR @S1@
2 PAGE p. 12
2 QUAY 3
0 @S1@ SOUR
1 TITL Parish register of Boston
1 REPO @R1@
0 @R1@ REPO
1 NAME City archive
0 TRLR
";

/// The same kind of document in GEDCOM 5.5.1 form
pub const STANDARD_551: &str = "0 HEAD
1 SOUR PAF
2 VERS 5.1
2 NAME Personal Ancestral File
1 SUBM @U1@
1 GEDC
2 VERS 5.5.1
2 FORM LINEAGE-LINKED
1 CHAR UTF-8
1 DATE 1 JAN 2000
2 TIME 10:00:00
0 @U1@ SUBM
1 NAME Jane /Doe/
0 @I1@ INDI
1 NAME John /Doe/
2 GIVN John
2 SURN Doe
2 ROMN Jon /Doe/
3 TYPE pinyin
1 SEX M
1 BIRT Y
2 DATE 12 JAN 1850
1 RESI
2 ADDR 12 Elm Street
1 EDUC College
1 TITL Sir
1 RELI Quaker
1 EVEN
2 TYPE Custom
1 EMIG
2 DATE 1890
1 ADOP
2 FAMC @F1@
3 ADOP BOTH
1 NOTE @N1@
1 SOUR @S1@
2 PAGE 12
1 FAMS @F1@
0 @F1@ FAM
1 HUSB @I1@
1 ENGA
2 DATE 1877
1 MARR Y
1 RESI
2 PLAC Boston
1 NCHI 0
0 @N1@ NOTE A shared note
0 @S1@ SOUR
1 TITL Register
0 TRLR
";

/// Wrap individual substructure lines (level 1 and deeper) in a valid document.
///
/// The first wrapped line is line 4 (zero-based).
pub fn individual_with(lines: &str) -> String {
    format!("0 HEAD\n1 GEDC\n2 VERS 7.0\n0 @I1@ INDI\n{}\n0 TRLR\n", lines)
}

/// Wrap family substructure lines in a valid document; first wrapped line is line 4.
pub fn family_with(lines: &str) -> String {
    format!("0 HEAD\n1 GEDC\n2 VERS 7.0\n0 @F1@ FAM\n{}\n0 TRLR\n", lines)
}
