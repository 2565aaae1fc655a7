//! # Léxico-Semente em Francês
//!
//! Um conjunto pequeno de recursos embutidos, no mesmo formato tabular dos
//! recursos externos. Serve para demonstrações, testes e como base para
//! camadas adicionais carregadas do disco. Não pretende cobrir a língua:
//! um léxico real tem centenas de milhares de formas.

use crate::dictionary::{DictionaryStore, Resource, ResourceKind};
use crate::error::LoadError;

const COMMON: &str = "GRAPH,TAG,ORTH,LEM
# determinantes e pronomes
le,DETart,,le
la,DETart,,le
les,DETart,,le
l',DETart,le,le
un,DETart,,un
une,DETart,,un
des,DETart,,un
ce,DET,,ce
il,PRO,,il
elle,PRO,,elle
ils,PRO,,il
je,PRO,,je
tu,PRO,,tu
on,PRO,,on
nous,PRO,,nous
vous,PRO,,vous
se,PRO,,se
que,CONJ,,que
qui,PRO,,qui
et,CONJ,,et
ne,ADV,,ne
pas,ADV,,pas
# preposições
de,PREP,,de
du,PREP,,de
à,PREP,,à
au,PREP,,au
en,PREP,,en
dans,PREP,,dans
sur,PREP,,sur
pour,PREP,,pour
jusque,PREP,,jusque
# verbos
est,VERBaux,,être
sont,VERBaux,,être
été,VERBppass,,être
a,VERBaux,,avoir
ont,VERBaux,,avoir
avait,VERBaux,,avoir
eu,VERBppass,,avoir
vit,VERB,,vivre
vient,VERB,,venir
viens,VERB,,venir
arrivé,VERBppass,,arriver
arrivée,VERBppass,,arriver
fait,VERBppass,,faire
dit,VERBppass,,dire
parle,VERB,,parler
habite,VERB,,habiter
# substantivos
chemin,SUB,,chemin
chemins,SUB,,chemin
fer,SUB,,fer
homme,SUB,,homme
hommes,SUB,,homme
pomme,SUB,,pomme
terre,SUB,,terre
lieu,SUB,,lieu
livre,SUB,,livre
poète,SUB,,poète
fantôme,SUB,,fantôme
roi,SUB,,roi
rendez-vous,SUB,,rendez-vous
# títulos e tipos de lugar
monsieur,SUBpers,,monsieur
madame,SUBpers,,madame
mademoiselle,SUBpers,,mademoiselle
docteur,SUBpers,,docteur
oncle,SUBpers,,oncle
tante,SUBpers,,tante
saint,SUBpers,,saint
rue,SUBplace,,rue
place,SUBplace,,place
avenue,SUBplace,,avenue
boulevard,SUBplace,,boulevard
lac,SUBplace,,lac
mont,SUBplace,,mont
# adjetivos e advérbios
grand,ADJ,,grand
petit,ADJ,,petit
beau,ADJ,,beau
tout,ADV,,tout
hier,ADV,,hier
# locuções
chemin de fer,SUB,,chemin_de_fer
chemins de fer,SUB,,chemin_de_fer
pomme de terre,SUB,,pomme_de_terre
aujourd'hui,ADV,,aujourd'hui
d'abord,ADV,,d'abord
tout à fait,ADV,,tout_à_fait
avoir lieu,VERB,,avoir_lieu
parce que,CONJ,,parce_que
";

const PROPER: &str = "GRAPH,TAG,ORTH,LEM
Paris,NAMEplace,,Paris
Lyon,NAMEplace,,Lyon
France,NAMEplace,,France
New York,NAMEplace,,New York
Victor,NAMEpersf,,Victor
Charles,NAMEpersf,,Charles
Jean,NAMEpersf,,Jean
François,NAMEpersf,,François
Louis,NAMEpersf,,Louis
Marie,NAMEpersf,,Marie
Hugo,NAMEpers,,Hugo
Gaulle,NAMEpers,,Gaulle
Victor Hugo,NAMEpers,,Victor Hugo
";

const NORMALIZATION: &str = "GRAPH,ORTH
poëte,poète
phantôme,fantôme
sçavoir,savoir
françois,français
";

const ABBREVIATIONS: &str = "GRAPH,ORTH
M.,monsieur
MM.,messieurs
Mme.,madame
Dr.,docteur
St.,saint
etc.,et cetera
cf.,confer
";

const STOPWORDS: &str = "le
la
les
l'
un
une
des
de
du
d'
à
au
et
il
elle
que
qu'
qui
ne
pas
se
ce
en
";

/// Recursos embutidos, na ordem em que devem ser aplicados.
pub fn french_resources() -> Vec<Resource> {
    vec![
        Resource::new(ResourceKind::Common, "seed/common.csv", COMMON),
        Resource::new(ResourceKind::Proper, "seed/proper.csv", PROPER),
        Resource::new(ResourceKind::Normalization, "seed/norm.csv", NORMALIZATION),
        Resource::new(ResourceKind::Abbreviations, "seed/abbr.csv", ABBREVIATIONS),
        Resource::new(ResourceKind::Stopwords, "seed/stop.txt", STOPWORDS),
    ]
}

impl DictionaryStore {
    /// Store montado a partir do léxico-semente embutido.
    pub fn french_seed() -> Result<Self, LoadError> {
        DictionaryStore::load(&french_resources())
    }
}
