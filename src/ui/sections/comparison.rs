use leptos::prelude::*;

use super::{CheckoutLink, SectionHeading};
use crate::core::{
    Anchor, COMPARISON_COPY, COMPARISON_HEADERS, COMPARISON_ROWS, ComparisonRow, IconKind,
};
use crate::ui::icon::Icon;
use crate::ui::reveal::RevealOnView;

const COMPARISON_CTA_LABEL: &str = "QUERO OPERAR COM A IA";

/// Manual trader vs. automation section
#[component]
pub fn ComparisonSection() -> impl IntoView {
    view! {
        <section id=Anchor::Comparison.id() class="py-32 bg-white/[0.02]">
            <div class="max-w-5xl mx-auto px-6">
                <SectionHeading copy=COMPARISON_COPY />

                <RevealOnView>
                    <div class="rounded-[40px] overflow-x-auto border border-white/10 bg-black/40 backdrop-blur-xl">
                        <ComparisonTable rows={&COMPARISON_ROWS} />
                    </div>
                </RevealOnView>

                <RevealOnView delay=0.1 class="mt-12 flex justify-center">
                    <CheckoutLink class="inline-flex items-center gap-2 px-8 py-4 rounded-full border border-blue-500/40 text-blue-400 font-bold hover:bg-blue-500/10 transition-colors">
                        {COMPARISON_CTA_LABEL}
                        <Icon kind=IconKind::ArrowRight class="w-4 h-4" />
                    </CheckoutLink>
                </RevealOnView>
            </div>
        </section>
    }
}

/// Three-column table: capability, manual value (negative), automated value (positive)
#[component]
pub fn ComparisonTable(rows: &'static [ComparisonRow]) -> impl IntoView {
    let [feature_header, manual_header, automated_header] = COMPARISON_HEADERS;

    view! {
        <table class="w-full text-left border-collapse">
            <thead>
                <tr class="bg-white/5">
                    <th scope="col" class="p-8 text-xs font-black uppercase tracking-widest text-zinc-500">
                        {feature_header}
                    </th>
                    <th scope="col" class="p-8 text-xs font-black uppercase tracking-widest text-zinc-500">
                        {manual_header}
                    </th>
                    <th scope="col" class="p-8 text-xs font-black uppercase tracking-widest text-blue-500">
                        {automated_header}
                    </th>
                </tr>
            </thead>
            <tbody class="text-sm">
                {rows
                    .iter()
                    .map(|row| {
                        view! {
                            <tr class="border-t border-white/5 hover:bg-white/[0.02] transition-colors">
                                <th scope="row" class="p-8 font-bold text-white">{row.feature}</th>
                                <td class="p-8 text-red-400/80" data-marker="negative">
                                    <span class="flex items-center gap-2">
                                        <Icon kind=IconKind::XCircle class="w-4 h-4 flex-shrink-0" />
                                        {row.manual_value}
                                    </span>
                                </td>
                                <td class="p-8 text-emerald-400 font-bold" data-marker="positive">
                                    <span class="flex items-center gap-2">
                                        <Icon kind=IconKind::CheckCircle class="w-4 h-4 flex-shrink-0" />
                                        {row.automated_value}
                                    </span>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
