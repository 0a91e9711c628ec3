//! Table-driven checks of the normalization contract

use rstest::rstest;
use rte_toolbar::{normalize, ExclusionSet, Normalizer, Strategy};

#[rstest]
#[case::single_exclusion(
    "bold,italic,underline|fontname,fontsize",
    &["italic"],
    "bold,underline|fontname,fontsize"
)]
#[case::emptied_braced_group(
    "{bold,italic}|{forecolor,backcolor}",
    &["bold", "italic"],
    "{forecolor,backcolor}"
)]
#[case::modifiers_only("paragraphs:toggle,fontname:toggle", &[], "paragraphs,fontname")]
#[case::everything_excluded("bold,italic,underline", &["bold", "italic", "underline"], "")]
#[case::dividers_survive("a,b / c,d # e,f", &["c"], "a,b/d#e,f")]
#[case::whole_words_only("code,insertcode", &["code"], "insertcode")]
#[case::dropdown_modifier("{paragraphs:dropdown | fontsize:dropdown}", &[], "{paragraphs}|{fontsize}")]
#[case::excluded_with_modifier("paragraphs:toggle,fontname", &["paragraphs:toggle"], "fontname")]
#[case::emptied_section("a / b # c", &["b"], "a/c")]
#[case::trailing_separators("bold,italic|", &["italic"], "bold")]
#[case::adjacent_braces_kept("{indent,outdent}{superscript,subscript}", &[], "{indent,outdent}{superscript,subscript}")]
#[case::empty_input("", &[], "")]
fn normalizes(#[case] toolbar: &str, #[case] excluded: &[&str], #[case] expected: &str) {
    assert_eq!(normalize(toolbar, excluded), expected);
}

#[rstest]
fn strategies_agree_on_scenarios(
    #[values(
        ("bold,italic,underline|fontname,fontsize", &["italic"][..]),
        ("{bold,italic}|{forecolor,backcolor}", &["bold", "italic"][..]),
        ("a,b / c,d # e,f", &["c"][..]),
        ("{a,b}|{c}{d}", &["c"][..])
    )]
    input: (&str, &[&str]),
) {
    let (toolbar, excluded) = input;
    let exclusions = ExclusionSet::new(excluded);
    let structural = Normalizer::new().with_strategy(Strategy::Structural);
    let textual = Normalizer::new().with_strategy(Strategy::Textual);

    assert_eq!(
        structural.normalize(toolbar, &exclusions),
        textual.normalize(toolbar, &exclusions)
    );
}
