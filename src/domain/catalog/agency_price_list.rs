//! The agency's standard price list and commercial terms.

use super::price_list::{Catalog, ItemSize, PriceListItem};
use crate::domain::foundation::{Money, ValidationError};

const ENTRIES: &[(&str, &str, ItemSize, i64)] = &[
    // Consultancy
    ("c1", "Desk Research e imersão estratégica", ItemSize::G, 3_000_000),
    ("c2", "Pesquisa & Design de EVP (C-Level + Workshops)", ItemSize::GG, 9_000_000),
    ("c3", "Diagnóstico da Jornada (Heatmap de Personas)", ItemSize::G, 4_500_000),
    ("c4", "Employer Branding Playbook (Guia Completo)", ItemSize::GG, 5_000_000),
    // Creative production
    ("1", "Anúncio impresso", ItemSize::G, 216_000),
    ("2", "Apresentação PPT - criação de 1 a 4 slides", ItemSize::M, 108_000),
    ("3", "Cartilha ou Guia – formato PDF, até 20 pgs", ItemSize::G, 864_000),
    ("4", "GIF animado – alta complexidade", ItemSize::G, 252_000),
    ("5", "KV – criação de sistema visual estratégico", ItemSize::GG, 819_000),
    ("6", "Logo ou selo (1 versão)", ItemSize::G, 234_000),
    ("7", "Post carrossel estático – até 4 telas", ItemSize::M, 162_000),
    ("8", "Site de baixa complexidade – até 3 pgs", ItemSize::G, 387_112),
    ("9", "Vídeo de alta complexidade (até 6 min)", ItemSize::G, 936_000),
    ("10", "Infográfico – alta complexidade", ItemSize::G, 576_000),
];

/// Commercial terms printed under every proposal.
pub const PROPOSAL_TERMS: &str = "\
Os valores desta proposta foram calculados a partir do custo das equipes e da \
estimativa de horas dedicadas aos projetos aprovados.

- Não estão incluídas despesas de viagem, deslocamento, produção de foto ou vídeo, \
brindes, logística de entregas, cachês, verba de impulsionamento ou ferramentas \
de terceiros.
- Despesas extras aprovadas podem ser reembolsadas por Nota de Débito com \
comprovantes ou por NFe de serviços com os tributos devidos.
- Pagamentos a terceiros intermediados pela agência têm taxa administrativa de 15%.
- As notas fiscais são emitidas até o dia 10 de cada mês, com 30 dias para pagamento.
- Pagamentos por transferência bancária ou boleto.";

/// Builds the default agency catalog.
pub fn agency_catalog() -> Result<Catalog, ValidationError> {
    let items = ENTRIES
        .iter()
        .map(|(id, description, size, cents)| {
            PriceListItem::new(id, *description, *size, Money::from_cents(*cents))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Catalog::from_items(items)
}
