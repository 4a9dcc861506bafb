use leptos::prelude::*;

use crate::components::icons::RefreshCw;
use crate::components::widgets::{PageHeader, TableState};
use crate::hooks::audit_logs::use_audit_logs;

#[component]
pub fn AuditLogsPage() -> impl IntoView {
    let logs = use_audit_logs();

    let rows = move || logs.data.get().unwrap_or_default();
    let empty = Signal::derive(move || rows().is_empty());

    view! {
        <div>
            <div class="flex items-start justify-between">
                <PageHeader title="Audit logs" subtitle="Recorded administrative actions" />
                <button
                    class="btn btn-ghost btn-sm gap-1"
                    on:click=move |_| logs.refetch.run(())
                >
                    <RefreshCw attr:class="h-4 w-4" /> "Refresh"
                </button>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0">
                    <table class="table table-sm">
                        <thead>
                            <tr>
                                <th>"When"</th>
                                <th>"Actor"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <TableState colspan="3" loading=logs.loading empty=empty error=logs.error />
                            <For
                                each=rows
                                key=|l| l.id
                                children=move |l| {
                                    view! {
                                        <tr>
                                            <td class="text-xs text-base-content/60">{l.at}</td>
                                            <td>{l.actor}</td>
                                            <td class="font-mono text-xs">{l.action}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
