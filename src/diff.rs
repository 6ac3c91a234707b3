use crate::slack::Channel;

/// Channels created strictly after `baseline`, archived ones excluded.
/// Input order is preserved; the lister hands us an ascending sort, so the
/// report comes out chronological.
pub fn select_new(channels: &[Channel], baseline: i64) -> Vec<&Channel> {
    channels
        .iter()
        .filter(|channel| channel.created > baseline && !channel.is_archived)
        .collect()
}

/// One `<#id|name>` reference per line.
pub fn render_report(new_channels: &[&Channel]) -> String {
    let mut report = String::new();
    for channel in new_channels {
        report.push_str(&format!("<#{}|{}>\n", channel.id, channel.name));
    }
    report
}

/// The next marker is the chronologically last channel of the sorted
/// listing, archived or not. An empty listing leaves the marker alone.
pub fn next_marker(channels: &[Channel]) -> Option<&Channel> {
    channels.last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: &str, created: i64, is_archived: bool) -> Channel {
        Channel {
            id: id.into(),
            name: id.to_lowercase(),
            created,
            creator: String::new(),
            is_channel: true,
            is_archived,
            is_general: false,
            is_member: false,
            num_members: 0,
            topic: Default::default(),
            purpose: Default::default(),
        }
    }

    #[test]
    fn reports_only_unarchived_channels_past_the_baseline() {
        let channels = vec![
            channel("C1", 50, false),
            channel("C2", 150, false),
            channel("C3", 200, true),
        ];

        let new_channels = select_new(&channels, 100);
        assert_eq!(new_channels.len(), 1);
        assert_eq!(new_channels[0].id, "C2");

        let report = render_report(&new_channels);
        assert_eq!(report, "<#C2|c2>\n");

        // The marker still advances on the archived channel.
        assert_eq!(next_marker(&channels).unwrap().created, 200);
    }

    #[test]
    fn selection_ignores_input_order() {
        let shuffled = vec![
            channel("C3", 300, false),
            channel("C1", 150, false),
            channel("C2", 250, true),
        ];
        let ids: Vec<_> = select_new(&shuffled, 100)
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(ids, ["C3", "C1"]);
    }

    #[test]
    fn zero_baseline_reports_everything_unarchived() {
        let channels = vec![
            channel("C1", 10, false),
            channel("C2", 20, true),
            channel("C3", 30, false),
        ];
        let new_channels = select_new(&channels, 0);
        assert_eq!(render_report(&new_channels), "<#C1|c1>\n<#C3|c3>\n");
    }

    #[test]
    fn second_run_reports_nothing() {
        let channels = vec![channel("C1", 100, false), channel("C2", 200, false)];
        let marker = next_marker(&channels).unwrap().created;
        assert!(select_new(&channels, marker).is_empty());
        // The marker candidate is unchanged too.
        assert_eq!(next_marker(&channels).unwrap().created, marker);
    }

    #[test]
    fn empty_listing_selects_nothing_and_has_no_marker() {
        let channels: Vec<Channel> = Vec::new();
        assert!(select_new(&channels, 0).is_empty());
        assert!(render_report(&[]).is_empty());
        assert!(next_marker(&channels).is_none());
    }

    #[test]
    fn report_lines_follow_ascending_creation_order() {
        let channels = vec![
            channel("C1", 100, false),
            channel("C2", 200, false),
            channel("C3", 300, false),
        ];
        let report = render_report(&select_new(&channels, 0));
        assert_eq!(report, "<#C1|c1>\n<#C2|c2>\n<#C3|c3>\n");
    }
}
