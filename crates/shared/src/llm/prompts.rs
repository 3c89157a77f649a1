pub const PERSONA_SYSTEM_PROMPT: &str =
    "Você é AIRA, IA especializada em Amazônia e desmatamento.";

/// Prompt for the one-shot alert analysis: persona preamble, the look-back
/// window, and the formatted alert summary.
pub fn analysis_prompt(dias: i64, resumo: &str) -> String {
    format!(
        "Seu nome é AIRA,\n\
         Você é uma IA especializada em desmatamento.\n\
         Analise os seguintes alertas do MapBiomas (últimos {dias} dias):\n\
         \n\
         {resumo}\n\
         \n\
         Resuma destacando:\n\
         - Total de alertas e áreas críticas\n\
         - Principais estados e biomas afetados\n\
         - Qualquer tendência relevante"
    )
}
