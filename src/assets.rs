//! Fixed templates for the files the scaffolder generates rather than
//! copies. All three are rendered through tera; only the readme carries an
//! interpolation.

pub const ENV_LOCAL: &str = "\
# Hgraph API Key
# Get your API key at https://hgraph.io
NEXT_PUBLIC_HGRAPH_API_KEY=your_api_key_here
";

pub const GITIGNORE: &str = "\
# dependencies
/node_modules
/.pnp
.pnp.js

# testing
/coverage

# next.js
/.next/
/out/

# production
/build

# misc
.DS_Store
*.pem

# debug
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# local env files
.env*.local

# vercel
.vercel

# typescript
*.tsbuildinfo
next-env.d.ts
";

pub const README: &str = "\
# {{ project_name }}

A Hedera Next.js application built with [@hgraph.io/nextjs-template](https://www.npmjs.com/package/@hgraph.io/nextjs-template).

## Getting Started

1. Configure your environment variables in `.env.local`:

   ```env
   NEXT_PUBLIC_HGRAPH_API_KEY=your_api_key_here
   ```

   Get your API key at [https://hgraph.io](https://hgraph.io)

2. Start the development server:

   ```bash
   npm run dev
   ```

3. Open [http://localhost:3000](http://localhost:3000) in your browser

4. Explore Hedera integration examples at [http://localhost:3000/test-suite](http://localhost:3000/test-suite)

## Available Scripts

- `npm run dev` - Start development server
- `npm run build` - Build for production
- `npm start` - Start production server
- `npm run lint` - Run ESLint

## Documentation

- [Hgraph Documentation](https://docs.hgraph.io)
- [Next.js Documentation](https://nextjs.org/docs)
- [Hedera Documentation](https://docs.hedera.com)

## Resources

- [@hgraph.io/sdk](https://www.npmjs.com/package/@hgraph.io/sdk) - Hedera blockchain SDK
- [Template Repository](https://github.com/hgraph-io/nextjs-template)
";

/// Generated files in the order they are staged, paired with their template.
pub const GENERATED_FILES: &[(&str, &str)] = &[
    (".env.local", ENV_LOCAL),
    (".gitignore", GITIGNORE),
    ("README.md", README),
];
