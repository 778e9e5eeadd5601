use planner::{ApplianceLine, EntryId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ApplianceListProps {
    pub lines: Vec<ApplianceLine>,
    pub on_remove: Callback<EntryId>,
}

/// Rebuilt from scratch on every render; each remove button carries the
/// entry's stable id rather than its position.
#[function_component(ApplianceList)]
pub fn appliance_list(props: &ApplianceListProps) -> Html {
    html! {
        <ul id="appliances_ul" class="space-y-1">
            { for props.lines.iter().map(|line| {
                let on_remove = props.on_remove.clone();
                let id = line.id;
                html! {
                    <li key={id.to_string()} class="flex items-center gap-2">
                        <span>{&line.text}</span>
                        <button
                            class="btn btn-xs"
                            onclick={Callback::from(move |_| {
                                log::debug!("User clicked remove for appliance #{}", id);
                                on_remove.emit(id);
                            })}
                        >
                            {"remove"}
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}
