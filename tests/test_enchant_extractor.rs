#[cfg(test)]
mod tests {
    use enchant_reagents::extractors::{EnchantExtractor, Extractor, ParsingContext};
    use enchant_reagents::{extract, NotFound, Reagent};

    const ICON: &str = "https://wow.zamimg.com/images/wow/icons/small/inv_enchant_dustsoul.jpg";

    fn reagent_row(id: &str, style: &str, quantity: &str, quality: &str, name: &str) -> String {
        format!(
            r#"<tr id="{id}" style="{style}" data-icon-list-quantity="{quantity}">
                <td><div class="iconsmall" data-env="live"><ins style='background-image: url("{ICON}");'></ins><del></del></div></td>
                <td><a href="/item=1" class="{quality}">{name}</a></td>
            </tr>"#
        )
    }

    fn flat_page(rows: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
            <html>
            <head><title>Enchant Bracer - Greater Strength - Spell - Classic</title></head>
            <body>
                <div class="text">
                    <h1 class="heading-size-1">Enchant Bracer - Greater Strength</h1>
                    <table class="icon-list">
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </body>
            </html>"#
        )
    }

    fn sectioned_page(rows: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
            <html>
            <body>
                <h1 class="heading-size-1">Enchant Cloak - Lesser Agility</h1>
                <div class="tooltip">
                    <h2 id="icon-list-heading-reagents" class="heading-size-3">Reagents</h2>
                    <div class="icon-list-wrapper">
                        <table class="icon-list">{rows}</table>
                    </div>
                </div>
            </body>
            </html>"#
        )
    }

    fn sectioned_row(quantity: &str, name: &str) -> String {
        format!(
            r#"<tr data-icon-list-quantity="{quantity}">
                <td><div class="iconsmall"><ins></ins></div></td>
                <td><a class="q1" href="/item=2">{name}</a></td>
            </tr>"#
        )
    }

    #[test]
    fn test_flat_layout() {
        let rows = [
            reagent_row("icon-list-reagents-0", "", "2", "q2", "Greater Eternal Essence"),
            reagent_row("icon-list-reagents-1", "display:none", "5", "q2", "Hidden Rank"),
            reagent_row("icon-list-reagents-2", "", "1", "q1", "Vision Dust"),
        ]
        .concat();

        let recipe = extract(&flat_page(&rows)).unwrap();

        assert_eq!(recipe.title_part1, "Enchant Bracer");
        assert_eq!(recipe.title_part2, "Greater Strength");
        assert_eq!(
            recipe.reagents,
            vec![
                Reagent {
                    name: "Greater Eternal Essence".to_string(),
                    quantity: 2,
                    icon_url: Some(ICON.to_string()),
                },
                Reagent {
                    name: "Vision Dust".to_string(),
                    quantity: 1,
                    icon_url: Some(ICON.to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_sectioned_layout_used_when_no_flat_rows() {
        let rows = [
            sectioned_row("4", "Strange Dust"),
            "<tr><td>Spacer without quantity</td></tr>".to_string(),
            sectioned_row("abc", "Lesser Magic Essence"),
        ]
        .concat();

        let recipe = extract(&sectioned_page(&rows)).unwrap();

        assert_eq!(recipe.title_part1, "Enchant Cloak");
        assert_eq!(recipe.title_part2, "Lesser Agility");
        assert_eq!(recipe.reagents.len(), 2);
        assert_eq!(recipe.reagents[0].name, "Strange Dust");
        assert_eq!(recipe.reagents[0].quantity, 4);
        assert_eq!(recipe.reagents[0].icon_url, None);
        assert_eq!(recipe.reagents[1].name, "Lesser Magic Essence");
        assert_eq!(recipe.reagents[1].quantity, 1);
    }

    #[test]
    fn test_flat_rows_take_precedence_over_sectioned_layout() {
        let flat = reagent_row("icon-list-reagents-0", "", "3", "q3", "Large Brilliant Shard");
        let page = format!(
            r#"<html><body>
                <h1 class="heading-size-1">Enchant Weapon - Crusader</h1>
                <table>{flat}</table>
                <h2 id="icon-list-heading-reagents">Reagents</h2>
                <table class="icon-list">{}</table>
            </body></html>"#,
            sectioned_row("9", "Should Not Appear")
        );

        let recipe = extract(&page).unwrap();
        assert_eq!(recipe.reagents.len(), 1);
        assert_eq!(recipe.reagents[0].name, "Large Brilliant Shard");
        assert_eq!(recipe.reagents[0].quantity, 3);
    }

    #[test]
    fn test_flat_rows_without_names_do_not_trigger_fallback() {
        let flat = reagent_row("icon-list-reagents-0", "", "3", "q9", "Not An Item");
        let page = format!(
            r#"<html><body>
                <h1 class="heading-size-1">Enchant Weapon - Crusader</h1>
                <table>{flat}</table>
                <h2 id="icon-list-heading-reagents">Reagents</h2>
                <table class="icon-list">{}</table>
            </body></html>"#,
            sectioned_row("1", "Ignored")
        );

        assert_eq!(extract(&page), Err(NotFound::Reagents));
    }

    #[test]
    fn test_missing_title_is_not_found() {
        let rows = reagent_row("icon-list-reagents-0", "", "1", "q1", "Dust");
        let page = flat_page(&rows).replace("heading-size-1", "heading-size-2");
        assert_eq!(extract(&page), Err(NotFound::Title));
    }

    #[test]
    fn test_title_without_dash() {
        let rows = reagent_row("icon-list-reagents-0", "", "1", "q1", "Dust");
        let page = flat_page(&rows).replace("Enchant Bracer - Greater Strength</h1>", "SingleName</h1>");
        let recipe = extract(&page).unwrap();
        assert_eq!(recipe.title_part1, "SingleName");
        assert_eq!(recipe.title_part2, "");
    }

    #[test]
    fn test_only_row_without_quality_link_is_not_found() {
        let rows = reagent_row("icon-list-reagents-0", "", "1", "q0", "Trash");
        assert_eq!(extract(&flat_page(&rows)), Err(NotFound::Reagents));
    }

    #[test]
    fn test_all_rows_hidden_is_not_found() {
        let rows = reagent_row("icon-list-reagents-0", "display: none;", "1", "q1", "Dust");
        assert_eq!(extract(&flat_page(&rows)), Err(NotFound::Reagents));
    }

    #[test]
    fn test_duplicate_reagents_are_kept() {
        let rows = [
            reagent_row("icon-list-reagents-0", "", "1", "q1", "Dust"),
            reagent_row("icon-list-reagents-1", "", "2", "q1", "Dust"),
        ]
        .concat();
        let recipe = extract(&flat_page(&rows)).unwrap();
        let quantities: Vec<_> = recipe.reagents.iter().map(|r| r.quantity).collect();
        assert_eq!(quantities, vec![1, 2]);
    }

    #[test]
    fn test_garbage_markup_is_not_found() {
        for markup in ["", "not html at all", "<h1 class=\"heading-size-1\">", "<<<>>><tr id=icon-list-reagents>"] {
            assert!(extract(markup).is_err(), "markup: {markup}");
        }
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let rows = reagent_row("icon-list-reagents-0", "", "2", "q2", "Greater Eternal Essence");
        let page = flat_page(&rows);
        assert_eq!(extract(&page), extract(&page));
    }

    #[test]
    fn test_extractor_trait_with_context() {
        let rows = sectioned_row("2", "Strange Dust");
        let context = ParsingContext::new("https://example.com/spell=13419", &sectioned_page(&rows));

        let recipe = EnchantExtractor::default().parse(&context).unwrap();
        assert_eq!(recipe.reagents[0].quantity, 2);
    }
}
