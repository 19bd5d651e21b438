//! The published Jovian internal field models.

use std::{fmt, str::FromStr, sync::OnceLock};

use crate::{error::FieldError, model::InternalField, model::ModelDefinition};

/// Catalogue of the built in models, named `<model>_order<NN>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Jrm09Order10,
    Jrm33Order13,
    Jrm33Order18,
    IsaacOrder10,
    Vip4Order04,
    Vit4Order04,
    VipalOrder05,
    O6Order03,
}

struct Entry {
    name: &'static str,
    degree: usize,
    order: usize,
    g: &'static [f64],
    h: &'static [f64],
    reference_radius_km: f64,
    citation: &'static str,
    notes: &'static str,
}

impl Model {
    pub const ALL: [Model; 8] = [
        Model::Jrm09Order10,
        Model::Jrm33Order13,
        Model::Jrm33Order18,
        Model::IsaacOrder10,
        Model::Vip4Order04,
        Model::Vit4Order04,
        Model::VipalOrder05,
        Model::O6Order03,
    ];

    fn entry(self) -> Entry {
        match self {
            Model::Jrm09Order10 => Entry {
                name: "jrm09_order10",
                degree: 10,
                order: 10,
                g: &JRM09_G,
                h: &JRM09_H,
                reference_radius_km: 71492.0,
                citation: "Connerney et al. (2018), https://doi.org/10.1002/2018GL077312",
                notes: "Coefficients from supplemental Table S1.",
            },
            Model::Jrm33Order13 => Entry {
                name: "jrm33_order13",
                degree: 18,
                order: 13,
                g: &JRM33_G,
                h: &JRM33_H,
                reference_radius_km: 71492.0,
                citation: "Connerney et al. (2021), https://doi.org/10.1029/2021JE007055",
                notes: "Degree 18 coefficient set evaluated to order 13.",
            },
            Model::Jrm33Order18 => Entry {
                name: "jrm33_order18",
                degree: 18,
                order: 18,
                g: &JRM33_G,
                h: &JRM33_H,
                reference_radius_km: 71492.0,
                citation: "Connerney et al. (2021), https://doi.org/10.1029/2021JE007055",
                notes: "Coefficients from supporting information S02.",
            },
            Model::IsaacOrder10 => Entry {
                name: "isaac_order10",
                degree: 10,
                order: 10,
                g: &ISAAC_G,
                h: &ISAAC_H,
                reference_radius_km: 71492.0,
                citation: "Hess et al. (2017), https://doi.org/10.1553/PRE8s157",
                notes: "Published in G to 4 to 6 decimal places, stored here in nT.",
            },
            Model::Vip4Order04 => Entry {
                name: "vip4_order04",
                degree: 4,
                order: 4,
                g: &VIP4_G,
                h: &VIP4_H,
                reference_radius_km: 71323.0,
                citation: "Connerney et al. (1998), https://doi.org/10.1029/97JA03726",
                notes: "Values to the precision of Connerney (2007), table 3.",
            },
            Model::Vit4Order04 => Entry {
                name: "vit4_order04",
                degree: 4,
                order: 4,
                g: &VIT4_G,
                h: &VIT4_H,
                reference_radius_km: 71323.0,
                citation: "Connerney (2007), https://doi.org/10.1016/B978-044452748-6.00159-0",
                notes: "Values to the precision of Connerney (2007), table 3.",
            },
            Model::VipalOrder05 => Entry {
                name: "vipal_order05",
                degree: 5,
                order: 5,
                g: &VIPAL_G,
                h: &VIPAL_H,
                reference_radius_km: 71492.0,
                citation: "Hess et al. (2011), https://doi.org/10.1029/2010JA016262",
                notes: "Published in G, stored here rounded to whole nT.",
            },
            Model::O6Order03 => Entry {
                name: "o6_order03",
                degree: 3,
                order: 3,
                g: &O6_G,
                h: &O6_H,
                reference_radius_km: 71372.0,
                citation: "Connerney (1992) (No known DOI)",
                notes: "https://ui.adsabs.harvard.edu/abs/1992pre3.conf...13C/abstract",
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Owned definition of the model, ready to serialize or to build a custom field from.
    pub fn definition(self) -> ModelDefinition {
        let e = self.entry();
        ModelDefinition {
            name: e.name.to_string(),
            planet: "Jupiter".to_string(),
            degree: e.degree,
            order: e.order,
            g: e.g.to_vec(),
            h: e.h.to_vec(),
            reference_radius_km: e.reference_radius_km,
            citation: e.citation.to_string(),
            notes: Some(e.notes.to_string()),
        }
    }

    /// Shared field of the model with the default configuration, prepared on first use.
    pub fn field(self) -> Result<&'static InternalField, FieldError> {
        static FIELDS: [OnceLock<InternalField>; 8] = [const { OnceLock::new() }; 8];

        let cell = &FIELDS[self as usize];
        if let Some(field) = cell.get() {
            return Ok(field);
        }
        let field = InternalField::new(self.definition())?;
        Ok(cell.get_or_init(|| field))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Model {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Model::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| FieldError::UnknownModel(s.to_string()))
    }
}

// Raw Gauss coefficients in nT. Slots 0 and 1 are placeholders, then one row per degree
// holding orders 0..=n.

#[rustfmt::skip]
const JRM09_G: [f64; 67] = [
    0.0, 0.0,
    410244.7, -71498.3,
    11670.4, -56835.8, 48689.5,
    4018.6, -37791.1, 15926.3, -2710.5,
    -34645.4, -8247.6, -2406.1, -11083.8, -17837.2,
    -18023.6, 4683.9, 16160.0, -16402.0, -2600.7, -3660.7,
    -20819.6, 9992.9, 11791.8, -12574.7, 2669.7, 1113.2, 7584.9,
    598.4, 4665.9, -6495.7, -2516.5, -6448.5, 1855.3, -2892.9, 2968.0,
    10059.2, 1934.4, -6702.9, 153.7, -4124.2, -867.2, -3740.6, -732.4, -2433.2,
    9671.8, -3046.2, 260.9, 2071.3, 3329.6, -2523.1, 1787.1, -1148.2, 1276.5, -1976.8,
    -2299.5, 2009.7, 2127.8, 3498.3, 2967.6, 16.3, 1806.5, -46.5, 2897.8, 574.5, 1298.9,
];

#[rustfmt::skip]
const JRM09_H: [f64; 67] = [
    0.0, 0.0,
    0.0, 21330.5,
    0.0, -42027.3, 19353.2,
    0.0, -32957.3, 42084.5, -27544.2,
    0.0, 31994.5, 27811.2, -926.1, 367.1,
    0.0, 45347.9, -749.0, 6268.5, 10859.6, 9608.4,
    0.0, 14533.1, -10592.9, 568.6, 12871.7, -4147.8, 3604.4,
    0.0, -7626.3, -10948.4, 2633.3, 5394.2, -6050.8, -1526.0, -5684.2,
    0.0, -2409.7, -11614.6, 9287.0, -911.9, 2754.5, -2446.1, 1207.3, -2887.3,
    0.0, -8467.4, -1383.8, 5697.7, -2056.3, 3081.5, -721.2, 1352.5, -210.1, 1567.6,
    0.0, -4692.6, 4445.8, -2378.6, -2204.3, 164.1, -1361.6, -2031.5, 1411.8, -714.3, 1676.5,
];

#[rustfmt::skip]
const JRM33_G: [f64; 191] = [
    0.0, 0.0,
    410993.4, -71305.9,
    11796.7, -56972.4, 48250.2,
    2799.3, -37488.4, 15396.8, -1489.8,
    -34402.0, -8080.8, -2440.5, -10848.3, -17919.1,
    -18265.7, 4221.8, 16599.5, -17345.8, -2544.5, -4987.7,
    -20968.0, 9887.6, 12192.4, -12548.7, 2742.2, 1557.6, 8018.2,
    59.9, 5366.1, -7099.5, -1533.4, -7055.7, 3060.6, -2488.3, 3700.8,
    10849.5, 1323.8, -6952.2, -95.0, -4746.6, -1301.7, -4284.6, -1436.7, -3024.6,
    8914.4, -3506.7, 288.1, 773.6, 3592.7, -3170.8, 1406.3, -1526.6, 1313.3, -2314.6,
    -2516.5, 1883.2, 2836.1, 4259.4, 3776.7, 764.4, 2112.3, 724.8, 2496.3, 840.1, 1179.4,
    1311.6, 3056.9, -2060.6, 3550.1, 589.7, 194.8, -1073.3, -521.7, 685.3, 350.2, -326.6, 1088.8,
    2300.5, 1688.4, -291.7, 483.2, -581.9, -818.4, -1095.6, -1987.8, 484.5, -1473.1, -666.5, -755.4, -220.8,
    751.5, -456.4, 1160.4, -2307.8, -77.1, -16.9, 594.8, -950.7, 1042.3, -641.8, 41.6, -229.1, -40.3, -287.8,
    1164.6, -2478.0, 907.7, -1280.7, 148.5, 1468.8, -8.1, 604.5, 787.2, 327.7, 111.6, 245.2, 127.3, 425.9, 6.3,
    469.4, -1929.2, -38.7, -815.9, -775.7, 31.0, -149.9, 318.2, -298.3, -149.3, 241.4, -69.4, 367.0, -22.2, 91.8, -43.7,
    -809.2, -888.9, -604.0, -339.1, -350.6, -503.8, -235.5, 9.0, -498.7, -283.2, -50.9, -515.2, -255.3, 15.6, -24.7, -176.5, 49.2,
    -1238.7, -190.2, -101.5, -58.0, 10.0, -525.9, 468.4, 88.1, -385.1, 77.6, 75.7, -148.9, 201.8, 61.7, -243.6, 168.2, -42.2, 7.3,
    -796.0, 443.6, 266.9, 391.2, 366.2, 175.8, 512.5, 151.0, 214.9, 243.4, 337.5, -10.2, -34.9, 161.2, 222.3, -119.6, 28.0, 132.6, -180.6,
];

#[rustfmt::skip]
const JRM33_H: [f64; 191] = [
    0.0, 0.0,
    0.0, 20958.4,
    0.0, -42549.0, 20221.5,
    0.0, -32890.6, 42518.4, -27397.7,
    0.0, 32452.4, 27438.6, -501.4, -1325.1,
    0.0, 45363.1, -826.2, 6000.6, 10568.8, 10091.5,
    0.0, 14016.9, -10119.1, -294.9, 13948.3, -3686.9, 4783.1,
    0.0, -7654.8, -11398.6, 2171.0, 5301.6, -6618.1, -1933.8, -5802.9,
    0.0, -2297.4, -12833.5, 10019.6, -1725.6, 2387.1, -3237.1, 906.1, -3178.3,
    0.0, -7899.6, -1328.3, 6566.5, -1275.3, 3617.1, -194.8, 1960.3, 956.9, 1831.7,
    0.0, -5689.8, 5570.3, -2541.6, -1795.2, -217.8, -628.3, -1619.6, 454.6, -840.0, 1581.4,
    0.0, 549.1, 4527.6, -4223.0, -2761.9, -476.0, -2714.4, -1349.2, -1649.0, -1471.5, -583.0, -499.8,
    0.0, 4204.2, 2228.0, -1901.1, -1271.2, 1073.4, -1111.9, 872.9, -837.9, -462.8, -22.0, 110.3, -712.7,
    0.0, 4125.6, -44.0, -455.4, 2160.6, 255.4, 1105.1, 1214.2, 196.1, -207.7, 1195.7, 472.4, 721.6, 51.3,
    0.0, -847.8, -124.9, 108.8, 1456.2, -1284.6, 896.5, 237.0, 225.8, -80.9, 696.9, 326.5, 225.9, 71.0, 124.4,
    0.0, -1146.4, -580.4, 527.3, 120.0, -478.9, 148.4, 45.7, -882.5, -206.6, -74.9, 51.0, 36.4, -44.4, -285.9, 135.1,
    0.0, -932.8, -608.1, 510.2, -587.4, -39.4, 358.1, 279.8, 244.5, 487.3, 366.7, 93.9, 282.8, -267.7, 39.8, -213.1, 32.4,
    0.0, -209.2, -15.8, 54.4, 308.7, 722.0, 233.3, -82.1, 221.5, 488.6, 206.3, 176.7, 353.4, 204.8, -29.5, 12.8, -89.6, -166.6,
    0.0, 670.9, -176.1, -340.3, 37.0, 304.3, -348.8, -291.9, 165.6, 360.9, -119.0, 100.1, 26.9, 1.0, -60.2, 66.5, 277.8, 29.1, 15.3,
];

#[rustfmt::skip]
const ISAAC_G: [f64; 67] = [
    0.0, 0.0,
    406650.0, -71420.0,
    -12860.0, -69810.0, 38520.0,
    -4790.0, -46420.0, 28670.0, -9340.0,
    -22300.0, 18930.0, 2760.0, -13170.0, 1110.0,
    -1650.0, 7550.0, 6230.0, -1500.0, -4000.0, 1420.0,
    -6370.0, 3240.0, 8020.0, 270.0, -4070.0, 2790.0, -680.0,
    640.0, 8920.0, 3660.0, -6980.0, -1140.0, 2390.0, -1230.0, 310.0,
    -5110.0, 7200.0, 4530.0, -3710.0, -200.0, 3120.0, -2100.0, 710.0, -133.0,
    100.0, 330.0, -960.0, 370.0, 3390.0, -740.0, -680.0, 400.0, -92.0, 9.0,
    280.0, 490.0, -630.0, 910.0, 2850.0, -380.0, -620.0, 440.0, -169.0, 31.0, -0.8,
];

#[rustfmt::skip]
const ISAAC_H: [f64; 67] = [
    0.0, 0.0,
    0.0, 23530.0,
    0.0, -31700.0, 7950.0,
    0.0, -7503.0, 40310.0, -36860.0,
    0.0, 20780.0, 32930.0, -16950.0, 5960.0,
    0.0, 30.0, -3340.0, 2540.0, 3490.0, -840.0,
    0.0, 10510.0, -9600.0, 5030.0, 1270.0, -1060.0, 180.0,
    0.0, -270.0, -2970.0, 7390.0, 1980.0, -2120.0, 350.0, 19.0,
    0.0, 7810.0, -7380.0, 8520.0, -870.0, -1680.0, 720.0, -8.0, -46.0,
    0.0, -290.0, 1890.0, 1850.0, 690.0, 320.0, -430.0, 270.0, -120.0, 27.0,
    0.0, 230.0, 1720.0, 1250.0, -110.0, -110.0, -15.0, 360.0, -250.0, 80.0, -14.0,
];

#[rustfmt::skip]
const VIP4_G: [f64; 16] = [
    0.0, 0.0,
    420543.0, -65920.0,
    -5118.0, -61904.0, 49690.0,
    -1576.0, -52036.0, 24386.0, -17597.0,
    -16758.0, 22210.0, -6074.0, -20243.0, 6643.0,
];

#[rustfmt::skip]
const VIP4_H: [f64; 16] = [
    0.0, 0.0,
    0.0, 24992.0,
    0.0, -36052.0, 5250.0,
    0.0, -8804.0, 40829.0, -31586.0,
    0.0, 7557.0, 40411.0, -16597.0, 3866.0,
];

#[rustfmt::skip]
const VIT4_G: [f64; 16] = [
    0.0, 0.0,
    428077.0, -75306.0,
    -4283.0, -59426.0, 44386.0,
    8906.0, -21447.0, 21130.0, -1190.0,
    -22925.0, 18940.0, -3851.0, 9926.0, 1271.0,
];

#[rustfmt::skip]
const VIT4_H: [f64; 16] = [
    0.0, 0.0,
    0.0, 24616.0,
    0.0, -50154.0, 38452.0,
    0.0, -17187.0, 40667.0, -35263.0,
    0.0, 16088.0, 11807.0, 6195.0, 12641.0,
];

#[rustfmt::skip]
const VIPAL_G: [f64; 22] = [
    0.0, 0.0,
    420000.0, -69750.0,
    64410.0, -86720.0, 95980.0,
    -10580.0, -59000.0, 63220.0, 46710.0,
    -74660.0, 32820.0, -33800.0, 18260.0, -14290.0,
    -6600.0, 7370.0, -17110.0, -17930.0, -770.0, -7400.0,
];

#[rustfmt::skip]
const VIPAL_H: [f64; 22] = [
    0.0, 0.0,
    0.0, 19730.0,
    0.0, -40410.0, 60300.0,
    0.0, -23100.0, 51600.0, -11310.0,
    0.0, 32830.0, -21310.0, -6060.0, -4860.0,
    0.0, 20650.0, -11670.0, -2880.0, -500.0, -22790.0,
];

#[rustfmt::skip]
const O6_G: [f64; 11] = [
    0.0, 0.0,
    424202.0, -65929.0,
    -2181.0, -71106.0, 48714.0,
    7565.0, -15493.0, 19775.0, -17958.0,
];

#[rustfmt::skip]
const O6_H: [f64; 11] = [
    0.0, 0.0,
    0.0, 24116.0,
    0.0, -40304.0, 7179.0,
    0.0, -38824.0, 34243.0, -22439.0,
];
